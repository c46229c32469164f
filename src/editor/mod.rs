//! Rich-text editor settings.
//!
//! The editor is an external component that takes one flat settings object
//! at start-up. This module models that object so it can be loaded from a
//! JSON file, overridden field by field, and handed over as JSON again.
//! [`EditorConfig::default`] is the CPS profile.
//!
//! Beyond plain data transport, a few helpers interpret the settings the
//! way the editor does: splitting the delimited font lists, checking a
//! file name against a resource's upload rule, and resolving browse-dialog
//! URLs against the editor's base path.

pub mod defaults;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

/// Resource types with their own upload rule and browse dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    Image,
    Flash,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Link,
        ResourceKind::Image,
        ResourceKind::Flash,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Link => "link",
            ResourceKind::Image => "image",
            ResourceKind::Flash => "flash",
        };
        f.write_str(name)
    }
}

/// One toolbar row: a group of commands, or the marker that starts a new
/// toolbar line (written `"/"` in the settings).
///
/// Inside a group, `"-"` is a separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawToolbarRow", into = "RawToolbarRow")]
pub enum ToolbarRow {
    Group(Vec<String>),
    LineBreak,
}

const LINE_BREAK_MARKER: &str = "/";
const SEPARATOR: &str = "-";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawToolbarRow {
    Group(Vec<String>),
    Marker(String),
}

impl TryFrom<RawToolbarRow> for ToolbarRow {
    type Error = String;

    fn try_from(raw: RawToolbarRow) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawToolbarRow::Group(commands) => Ok(ToolbarRow::Group(commands)),
            RawToolbarRow::Marker(marker) if marker == LINE_BREAK_MARKER => Ok(ToolbarRow::LineBreak),
            RawToolbarRow::Marker(other) => Err(format!(
                "toolbar row must be a command list or \"{}\", got {:?}",
                LINE_BREAK_MARKER, other
            )),
        }
    }
}

impl From<ToolbarRow> for RawToolbarRow {
    fn from(row: ToolbarRow) -> Self {
        match row {
            ToolbarRow::Group(commands) => RawToolbarRow::Group(commands),
            ToolbarRow::LineBreak => RawToolbarRow::Marker(LINE_BREAK_MARKER.to_string()),
        }
    }
}

/// Upload extension rule for one resource kind.
///
/// Both patterns are regular expressions matched case-insensitively
/// against the file name. An empty `allowed_extensions` allows every
/// name; an empty `denied_extensions` denies none.
///
/// Patterns are compiled on first use and kept with the rule, which is
/// why they are only settable through [`UploadRule::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadRule {
    /// Whether the quick-upload tab is offered at all
    pub enabled: bool,
    allowed_extensions: String,
    denied_extensions: String,
    #[serde(skip)]
    allowed: CompiledPattern,
    #[serde(skip)]
    denied: CompiledPattern,
}

impl UploadRule {
    pub fn new(
        enabled: bool,
        allowed_extensions: impl Into<String>,
        denied_extensions: impl Into<String>,
    ) -> Self {
        Self {
            enabled,
            allowed_extensions: allowed_extensions.into(),
            denied_extensions: denied_extensions.into(),
            ..Self::default()
        }
    }

    pub fn allowed_extensions(&self) -> &str {
        &self.allowed_extensions
    }

    pub fn denied_extensions(&self) -> &str {
        &self.denied_extensions
    }

    /// Check a file name against the allow and deny patterns.
    ///
    /// A pattern that fails to compile rejects the file.
    pub fn permits(&self, filename: &str) -> bool {
        if !self.allowed_extensions.is_empty() {
            match self.allowed.get(&self.allowed_extensions) {
                Some(regex) if regex.is_match(filename) => {}
                _ => return false,
            }
        }
        if !self.denied_extensions.is_empty() {
            match self.denied.get(&self.denied_extensions) {
                Some(regex) if !regex.is_match(filename) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Compiled form of one pattern string, filled on first use.
///
/// Always compares equal, so rule equality depends only on the pattern text.
#[derive(Debug, Clone, Default)]
struct CompiledPattern(OnceLock<Option<Regex>>);

impl CompiledPattern {
    fn get(&self, pattern: &str) -> Option<&Regex> {
        self.0.get_or_init(|| compile_pattern(pattern)).as_ref()
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for CompiledPattern {}

fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Invalid upload extension pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Browse-dialog settings for one resource kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Whether the "Browse server" button is shown
    pub enabled: bool,

    /// Dialog page, relative to the editor base path unless absolute
    pub url: String,

    /// Dialog width as a fraction of the screen width
    pub window_width_ratio: f64,

    /// Dialog height as a fraction of the screen height
    pub window_height_ratio: f64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: defaults::FILES_BROWSER_URL.to_string(),
            window_width_ratio: defaults::BROWSER_WINDOW_RATIO,
            window_height_ratio: defaults::BROWSER_WINDOW_RATIO,
        }
    }
}

/// Upload and browse settings for one resource kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    pub upload: UploadRule,
    pub browser: BrowserSettings,
}

/// An editor plugin and the UI languages it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpellChecker {
    #[serde(rename = "ieSpell")]
    IeSpell,
    #[default]
    SpellerPages,
}

/// Smiley dialog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmileySettings {
    /// Image folder, relative to the editor base path
    pub path: String,
    pub images: Vec<String>,
    pub columns: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SmileySettings {
    fn default() -> Self {
        Self {
            path: "images/smiley/msn/".to_string(),
            images: defaults::SMILEY_IMAGES.iter().map(|s| s.to_string()).collect(),
            columns: 8,
            window_width: 320,
            window_height: 240,
        }
    }
}

/// Output and editing behavior flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingOptions {
    pub enable_xhtml: bool,
    pub enable_source_xhtml: bool,
    pub process_html_entities: bool,
    pub include_latin_entities: bool,
    pub include_greek_entities: bool,
    pub fill_empty_blocks: bool,
    pub format_source: bool,
    pub format_output: bool,
    pub format_indentator: String,
    pub force_strong_em: bool,
    pub gecko_use_span: bool,
    pub startup_focus: bool,
    pub force_paste_as_plain_text: bool,
    pub auto_detect_paste_from_word: bool,
    pub force_simple_ampersand: bool,
    pub tab_spaces: u32,
    pub show_borders: bool,
    pub use_br_on_carriage_return: bool,
    pub ignore_empty_paragraph_value: bool,
    pub max_undo_levels: u32,
    pub disable_image_handles: bool,
    pub disable_table_handles: bool,
}

impl Default for EditingOptions {
    fn default() -> Self {
        Self {
            enable_xhtml: true,
            enable_source_xhtml: true,
            process_html_entities: true,
            include_latin_entities: false,
            include_greek_entities: true,
            fill_empty_blocks: true,
            format_source: true,
            format_output: true,
            format_indentator: "    ".to_string(),
            force_strong_em: true,
            gecko_use_span: false,
            startup_focus: false,
            force_paste_as_plain_text: false,
            auto_detect_paste_from_word: true,
            force_simple_ampersand: false,
            tab_spaces: 0,
            show_borders: true,
            use_br_on_carriage_return: false,
            ignore_empty_paragraph_value: true,
            max_undo_levels: 15,
            disable_image_handles: false,
            disable_table_handles: false,
        }
    }
}

/// Which parts of the link/image/flash dialogs are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    pub link_hide_target: bool,
    pub link_hide_advanced: bool,
    pub image_hide_link: bool,
    pub image_hide_advanced: bool,
    pub flash_hide_advanced: bool,
}

/// The full editor settings object.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub debug: bool,

    /// Stylesheet of the editing area, relative to the base path
    pub editor_area_css: String,
    pub doc_type: String,
    pub base_href: String,
    pub full_page: bool,
    pub skin_path: String,
    pub plugins_path: String,
    pub plugins: Vec<Plugin>,

    /// Regex sources of markup the editor must leave untouched
    pub protected_source: Vec<String>,

    pub auto_detect_language: bool,
    pub default_language: String,
    pub content_lang_direction: TextDirection,

    pub editing: EditingOptions,

    pub toolbar_start_expanded: bool,
    pub toolbar_can_collapse: bool,
    pub toolbar_sets: BTreeMap<String, Vec<ToolbarRow>>,
    pub context_menu: Vec<String>,

    /// Comma-delimited hex colors
    pub font_colors: String,
    /// Semicolon-delimited font stacks
    pub font_names: String,
    /// Semicolon-delimited `value/label` pairs
    pub font_sizes: String,
    /// Semicolon-delimited block tags
    pub font_formats: String,

    pub styles_xml_path: String,
    pub templates_xml_path: String,

    pub spell_checker: SpellChecker,
    pub ie_spell_download_url: String,

    pub dialogs: DialogOptions,

    pub link: ResourceSettings,
    pub image: ResourceSettings,
    pub flash: ResourceSettings,

    pub smileys: SmileySettings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            editor_area_css: "fckeditor_wysiwyg.css".to_string(),
            doc_type: r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#.to_string(),
            base_href: String::new(),
            full_page: false,
            skin_path: "fck_skins/default/".to_string(),
            plugins_path: "plugins/".to_string(),
            plugins: vec![Plugin {
                name: "semantic".to_string(),
                languages: vec!["en".to_string(), "fr".to_string()],
            }],
            protected_source: vec![r"(?i)<script[\s\S]*?/script>".to_string()],
            auto_detect_language: true,
            default_language: "en".to_string(),
            content_lang_direction: TextDirection::Ltr,
            editing: EditingOptions::default(),
            toolbar_start_expanded: true,
            toolbar_can_collapse: true,
            toolbar_sets: defaults::toolbar_sets(),
            context_menu: defaults::CONTEXT_MENU.iter().map(|s| s.to_string()).collect(),
            font_colors: defaults::FONT_COLORS.to_string(),
            font_names: defaults::FONT_NAMES.to_string(),
            font_sizes: defaults::FONT_SIZES.to_string(),
            font_formats: defaults::FONT_FORMATS.to_string(),
            styles_xml_path: "fckstyles-cps.xml".to_string(),
            templates_xml_path: "fcktemplates.xml".to_string(),
            spell_checker: SpellChecker::SpellerPages,
            ie_spell_download_url: "http://www.iespell.com/rel/ieSpellSetup211325.exe".to_string(),
            dialogs: DialogOptions::default(),
            link: ResourceSettings {
                upload: UploadRule::new(false, "", defaults::LINK_DENIED_EXTENSIONS),
                browser: BrowserSettings {
                    enabled: false,
                    url: defaults::FILES_BROWSER_URL.to_string(),
                    ..BrowserSettings::default()
                },
            },
            image: ResourceSettings {
                upload: UploadRule::new(false, defaults::IMAGE_ALLOWED_EXTENSIONS, ""),
                browser: BrowserSettings {
                    enabled: false,
                    url: defaults::IMAGES_BROWSER_URL.to_string(),
                    ..BrowserSettings::default()
                },
            },
            flash: ResourceSettings {
                upload: UploadRule::new(false, defaults::FLASH_ALLOWED_EXTENSIONS, ""),
                browser: BrowserSettings {
                    enabled: true,
                    url: defaults::FILES_BROWSER_URL.to_string(),
                    ..BrowserSettings::default()
                },
            },
            smileys: SmileySettings::default(),
        }
    }
}

impl EditorConfig {
    /// Load settings from a JSON file; absent fields keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse editor config {}", path.display()))
    }

    /// Get a toolbar set by name.
    pub fn toolbar_set(&self, name: &str) -> Option<&[ToolbarRow]> {
        self.toolbar_sets.get(name).map(Vec::as_slice)
    }

    /// Commands of a toolbar set in display order, without separators
    /// and line breaks. Empty for an unknown set.
    pub fn toolbar_commands(&self, name: &str) -> Vec<&str> {
        self.toolbar_set(name)
            .unwrap_or_default()
            .iter()
            .filter_map(|row| match row {
                ToolbarRow::Group(commands) => Some(commands),
                ToolbarRow::LineBreak => None,
            })
            .flatten()
            .map(String::as_str)
            .filter(|command| *command != SEPARATOR)
            .collect()
    }

    pub fn font_color_list(&self) -> Vec<&str> {
        split_list(&self.font_colors, ',')
    }

    pub fn font_name_list(&self) -> Vec<&str> {
        split_list(&self.font_names, ';')
    }

    pub fn font_format_list(&self) -> Vec<&str> {
        split_list(&self.font_formats, ';')
    }

    /// Font sizes as `(value, label)` pairs. An entry without `/` is used
    /// as both.
    pub fn font_size_list(&self) -> Vec<(&str, &str)> {
        split_list(&self.font_sizes, ';')
            .into_iter()
            .map(|entry| entry.split_once('/').unwrap_or((entry, entry)))
            .collect()
    }

    pub fn resource(&self, kind: ResourceKind) -> &ResourceSettings {
        match kind {
            ResourceKind::Link => &self.link,
            ResourceKind::Image => &self.image,
            ResourceKind::Flash => &self.flash,
        }
    }

    pub fn upload_rule(&self, kind: ResourceKind) -> &UploadRule {
        &self.resource(kind).upload
    }

    /// URL of a resource kind's browse dialog.
    ///
    /// Relative URLs are joined onto `base_path`; absolute paths and full
    /// URLs are returned unchanged.
    pub fn browser_url(&self, kind: ResourceKind, base_path: &str) -> String {
        let url = &self.resource(kind).browser.url;
        if url.starts_with('/') || url.contains("://") {
            return url.clone();
        }
        join_base(base_path, url)
    }
}

fn split_list(list: &str, delimiter: char) -> Vec<&str> {
    list.split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn join_base(base_path: &str, relative: &str) -> String {
    if base_path.is_empty() || base_path.ends_with('/') {
        format!("{}{}", base_path, relative)
    } else {
        format!("{}/{}", base_path, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Default Profile Tests ====================

    #[test]
    fn test_default_upload_rules() {
        let config = EditorConfig::default();
        assert!(config.upload_rule(ResourceKind::Link).allowed_extensions().is_empty());
        assert_eq!(
            config.upload_rule(ResourceKind::Image).allowed_extensions(),
            ".(jpg|gif|jpeg|png)$"
        );
        assert!(!config.upload_rule(ResourceKind::Flash).enabled);
    }

    #[test]
    fn test_default_only_flash_browser_enabled() {
        let config = EditorConfig::default();
        let enabled: Vec<ResourceKind> = ResourceKind::ALL
            .into_iter()
            .filter(|kind| config.resource(*kind).browser.enabled)
            .collect();
        assert_eq!(enabled, vec![ResourceKind::Flash]);
    }

    #[test]
    fn test_default_semantic_plugin() {
        let config = EditorConfig::default();
        assert_eq!(config.plugins[0].name, "semantic");
        assert_eq!(config.plugins[0].languages, vec!["en", "fr"]);
    }

    // ==================== Upload Rule Tests ====================

    #[test]
    fn test_link_rule_denies_server_scripts() {
        let rule = EditorConfig::default().link.upload;
        assert!(!rule.permits("index.php"));
        assert!(!rule.permits("SETUP.EXE"));
        assert!(rule.permits("report.pdf"));
    }

    #[test]
    fn test_image_rule_allows_only_images() {
        let rule = EditorConfig::default().image.upload;
        assert!(rule.permits("photo.JPG"));
        assert!(rule.permits("logo.png"));
        assert!(!rule.permits("movie.swf"));
    }

    #[test]
    fn test_empty_rule_permits_everything() {
        assert!(UploadRule::default().permits("anything.at.all"));
    }

    #[test]
    fn test_invalid_pattern_rejects() {
        let rule = UploadRule::new(true, "(unclosed", "");
        assert!(!rule.permits("file.txt"));
        assert!(!rule.permits("file.txt"));
    }

    #[test]
    fn test_patterns_compiled_once_and_reused() {
        let rule = EditorConfig::default().link.upload;
        assert!(rule.denied.0.get().is_none());

        assert!(rule.permits("notes.txt"));
        let first = rule.denied.0.get().and_then(Option::as_ref).unwrap() as *const Regex;

        assert!(!rule.permits("script.PHP"));
        let second = rule.denied.0.get().and_then(Option::as_ref).unwrap() as *const Regex;

        assert_eq!(first, second);
        assert!(rule.allowed.0.get().is_none());
    }

    #[test]
    fn test_invalid_pattern_cached_as_rejecting() {
        let rule = UploadRule::new(true, "", "[bad");
        assert!(!rule.permits("a.txt"));
        assert!(matches!(rule.denied.0.get(), Some(None)));
    }

    #[test]
    fn test_rule_equality_ignores_compiled_state() {
        let used = UploadRule::new(true, ".(png)$", "");
        used.permits("a.png");
        assert_eq!(used, UploadRule::new(true, ".(png)$", ""));
    }

    // ==================== List Tests ====================

    #[test]
    fn test_font_lists() {
        let config = EditorConfig::default();
        assert_eq!(config.font_color_list().len(), 40);
        assert_eq!(config.font_name_list()[7], "Courier New, Courier");
        assert_eq!(config.font_format_list().first(), Some(&"p"));
    }

    #[test]
    fn test_font_size_pairs() {
        let mut config = EditorConfig::default();
        assert_eq!(config.font_size_list()[0], ("1", "xx-small"));

        config.font_sizes = "10px;12px/small".to_string();
        assert_eq!(config.font_size_list(), vec![("10px", "10px"), ("12px", "small")]);
    }

    // ==================== Toolbar Tests ====================

    #[test]
    fn test_toolbar_commands_skip_separators() {
        let config = EditorConfig::default();
        assert_eq!(
            config.toolbar_commands("Basic"),
            vec!["Bold", "Italic", "OrderedList", "UnorderedList", "Link", "Unlink", "About"]
        );
    }

    #[test]
    fn test_unknown_toolbar_set() {
        let config = EditorConfig::default();
        assert!(config.toolbar_set("Nope").is_none());
        assert!(config.toolbar_commands("Nope").is_empty());
    }

    #[test]
    fn test_toolbar_row_json_form() {
        let rows = vec![
            ToolbarRow::Group(vec!["Bold".to_string()]),
            ToolbarRow::LineBreak,
        ];
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(json, r#"[["Bold"],"/"]"#);

        let parsed: Vec<ToolbarRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_toolbar_row_rejects_other_markers() {
        assert!(serde_json::from_str::<ToolbarRow>(r#""|""#).is_err());
    }

    // ==================== Browser URL Tests ====================

    #[test]
    fn test_browser_url_joins_base_path() {
        let config = EditorConfig::default();
        assert_eq!(
            config.browser_url(ResourceKind::Image, "/portal/fckeditor"),
            "/portal/fckeditor/fck_browse_images.html"
        );
        assert_eq!(
            config.browser_url(ResourceKind::Link, "/portal/fckeditor/"),
            "/portal/fckeditor/fck_browse_files.html"
        );
    }

    #[test]
    fn test_browser_url_absolute_unchanged() {
        let mut config = EditorConfig::default();
        config.flash.browser.url = "/editor/filemanager/browser.html?Type=Flash".to_string();
        assert_eq!(
            config.browser_url(ResourceKind::Flash, "/base/"),
            "/editor/filemanager/browser.html?Type=Flash"
        );
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("editor.json");
        fs::write(
            &path,
            r#"{ "default_language": "fr", "image": { "upload": { "enabled": true } } }"#,
        )
        .unwrap();

        let config = EditorConfig::load_from_path(&path).unwrap();
        assert_eq!(config.default_language, "fr");
        assert!(config.image.upload.enabled);
        assert_eq!(config.editing.max_undo_levels, 15);
        assert!(config.toolbar_set("ZopeCmf").is_some());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = EditorConfig::load_from_path(Path::new("/no/such/editor.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read editor config"));
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let config = EditorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EditorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
