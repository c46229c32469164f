//! Integration tests for the calendar locale registry and editor settings
//!
//! These tests drive the public API the way the calendar widget and the
//! editor host do: build a registry, resolve codes, read tooltips and date
//! patterns, and load settings from disk.

use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

use calendar_locales::config::Config;
use calendar_locales::editor::{EditorConfig, ResourceKind, ToolbarRow};
use calendar_locales::error::LocaleError;
use calendar_locales::i18n::tables::{ENGLISH, GERMAN, GERMAN_LEGACY};
use calendar_locales::i18n::{
    tooltip, LocaleRecord, LocaleRegistry, LocaleValidator, TooltipKey, MONTH_COUNT,
    WEEK_LENGTH,
};

// ==================== Test Helpers ====================

/// Write a record to `<dir>/<file>` as JSON
fn write_record(dir: &TempDir, file: &str, record: &LocaleRecord) {
    let json = serde_json::to_string_pretty(record).expect("serialize record");
    fs::write(dir.path().join(file), json).expect("write record");
}

fn config_with(dir: Option<&TempDir>, default_locale: &str) -> Config {
    Config {
        default_locale: default_locale.to_string(),
        locales_dir: dir.map(|d| d.path().to_path_buf()),
        editor_config_path: None,
    }
}

// ==================== Resolve Tests ====================

#[test]
fn test_every_registered_code_resolves_to_itself() {
    let registry = LocaleRegistry::default();
    for code in registry.codes() {
        assert_eq!(registry.resolve(code).code, code);
    }
}

#[test]
fn test_unregistered_code_resolves_to_default_every_time() {
    let registry = LocaleRegistry::with_builtin_locales("ro");
    let first = registry.resolve("pt-BR").clone();

    for _ in 0..3 {
        assert_eq!(registry.resolve("pt-BR"), &first);
    }
    assert_eq!(first.code, "ro");
}

// ==================== Table Shape Tests ====================

#[test]
fn test_every_record_has_wrapped_week_and_twelve_months() {
    let registry = LocaleRegistry::default();
    for record in registry.records() {
        let week = record.week_days();
        assert_eq!(week.len(), WEEK_LENGTH, "{}", record.code);
        assert_eq!(record.day_names.first(), record.day_names.last(), "{}", record.code);
        assert!(record.has_wrapped_days());
        assert_eq!(record.month_names.len(), MONTH_COUNT, "{}", record.code);
    }
}

#[test]
fn test_builtin_records_validate_clean() {
    let registry = LocaleRegistry::default();
    for record in registry.records() {
        let report = LocaleValidator::validate(record);
        assert!(report.is_clean(), "{}: {:?}", record.code, report);
    }
}

// ==================== Tooltip Tests ====================

#[test]
fn test_swedish_toggle_tooltip() {
    let registry = LocaleRegistry::default();
    assert_eq!(
        tooltip(registry.resolve("sv"), "TOGGLE"),
        "Skifta första veckodag"
    );
}

#[test]
fn test_german_week_tooltip_from_last_variant() {
    let registry = LocaleRegistry::default();
    assert_eq!(tooltip(registry.resolve("de"), "WK"), "Wo");
}

#[test]
fn test_nonexistent_tooltip_key_is_empty_everywhere() {
    let registry = LocaleRegistry::default();
    for record in registry.records() {
        assert_eq!(tooltip(record, "NONEXISTENT_KEY"), "");
        assert_eq!(tooltip(record, ""), "");
    }
}

#[test]
fn test_every_builtin_defines_every_tooltip() {
    let registry = LocaleRegistry::default();
    for record in registry.records() {
        for key in TooltipKey::ALL {
            assert!(!record.tooltip_for(key).is_empty(), "{} {}", record.code, key);
        }
    }
}

// ==================== Overwrite Tests ====================

#[test]
fn test_second_registration_replaces_first() {
    let mut registry = LocaleRegistry::new("en");
    registry.register(LocaleRecord::from(&GERMAN)).unwrap();
    let previous = registry.register(LocaleRecord::from(&GERMAN_LEGACY)).unwrap();

    assert_eq!(previous.map(|r| r.tooltip("WK").to_string()), Some("Wo".to_string()));
    assert_eq!(registry.resolve("de").tooltip("WK"), "wo");
}

#[test]
fn test_overwrite_replaces_whole_record() {
    let mut registry = LocaleRegistry::new("en");
    registry.register(LocaleRecord::from(&GERMAN)).unwrap();

    let mut replacement = LocaleRecord::from(&ENGLISH);
    replacement.code = "de".to_string();
    replacement.tooltips.clear();
    registry.register(replacement).unwrap();

    let de = registry.resolve("de");
    assert_eq!(de.month_names[0], "January");
    assert_eq!(de.tooltip("CLOSE"), "");
}

#[test]
fn test_register_empty_code_is_rejected() {
    let mut registry = LocaleRegistry::new("en");
    let mut record = LocaleRecord::from(&ENGLISH);
    record.code.clear();

    assert!(matches!(registry.register(record), Err(LocaleError::EmptyCode)));
}

// ==================== Date Format Tests ====================

#[test]
fn test_formats_follow_locale_patterns() {
    let registry = LocaleRegistry::default();
    let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();

    assert_eq!(registry.resolve("en").format_default(date), "2024-12-24");
    assert_eq!(registry.resolve("en").format_tooltip(date), "Tue, Dec 24");
    assert_eq!(
        registry.resolve("sv").format_tooltip(date),
        "Tisdag, 24 December 2024"
    );
}

// ==================== JSON Loading Tests ====================

#[test]
fn test_locales_dir_adds_and_overrides_records() {
    let dir = TempDir::new().unwrap();

    let mut british = LocaleRecord::from(&ENGLISH);
    british.code = "en-GB".to_string();
    british.default_date_format = "dd/mm/y".to_string();
    write_record(&dir, "en-GB.json", &british);

    let mut swedish = LocaleRecord::from(&ENGLISH);
    swedish.code = "sv".to_string();
    swedish.tooltips.insert(TooltipKey::Toggle, "Byt veckostart".to_string());
    write_record(&dir, "sv.json", &swedish);

    let registry = config_with(Some(&dir), "en").build_registry().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    assert_eq!(registry.resolve("en-GB").format_default(date), "05/03/2024");
    assert_eq!(tooltip(registry.resolve("sv"), "TOGGLE"), "Byt veckostart");
}

#[test]
fn test_record_file_without_tooltips_loads() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "code": "xx",
        "day_names": ["S", "M", "T", "W", "T", "F", "S", "S"],
        "month_names": ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"],
        "default_date_format": "y-mm-dd",
        "tooltip_date_format": "D, M d"
    });
    fs::write(dir.path().join("xx.json"), json.to_string()).unwrap();

    let registry = config_with(Some(&dir), "en").build_registry().unwrap();
    let record = registry.resolve("xx");

    assert_eq!(record.code, "xx");
    assert_eq!(tooltip(record, "TODAY"), "");

    let report = LocaleValidator::validate(record);
    assert!(!report.has_errors());
    assert_eq!(report.warnings.len(), TooltipKey::ALL.len());
}

#[test]
fn test_record_file_with_unknown_tooltip_key_fails() {
    let dir = TempDir::new().unwrap();
    let mut value = serde_json::to_value(LocaleRecord::from(&ENGLISH)).unwrap();
    value["tooltips"]["NOT_A_KEY"] = serde_json::json!("?");
    fs::write(dir.path().join("bad.json"), value.to_string()).unwrap();

    let err = config_with(Some(&dir), "en").build_registry().unwrap_err();
    let root = err.root_cause().to_string();
    assert!(root.contains("unknown variant"), "{}", root);
}

// ==================== Editor Tests ====================

#[test]
fn test_editor_profile_toolbar_line_break() {
    let editor = EditorConfig::default();
    let rows = editor.toolbar_set("ZopeCmf").unwrap();

    let break_at = rows.iter().position(|row| *row == ToolbarRow::LineBreak).unwrap();
    assert_eq!(
        rows[break_at + 1],
        ToolbarRow::Group(
            ["Style", "FontFormat", "FontName", "FontSize"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        )
    );
}

#[test]
fn test_editor_settings_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("editor.json");

    let mut editor = EditorConfig::default();
    editor.image.upload.enabled = true;
    editor.image.browser.url = "https://cdn.example.com/browse.html".to_string();
    fs::write(&path, serde_json::to_string(&editor).unwrap()).unwrap();

    let config = Config {
        default_locale: "en".to_string(),
        locales_dir: None,
        editor_config_path: Some(path),
    };
    let loaded = config.load_editor_config().unwrap();

    assert_eq!(loaded, editor);
    assert!(loaded.upload_rule(ResourceKind::Image).permits("diagram.PNG"));
    assert_eq!(
        loaded.browser_url(ResourceKind::Image, "/fck/"),
        "https://cdn.example.com/browse.html"
    );
}
