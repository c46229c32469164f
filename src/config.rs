use crate::editor::EditorConfig;
use crate::i18n::{LocaleRegistry, DEFAULT_LOCALE};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    // Locales
    pub default_locale: String,
    pub locales_dir: Option<PathBuf>,

    // Editor
    pub editor_config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = std::env::var("CALENDAR_DEFAULT_LOCALE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        if default_locale.is_empty() {
            anyhow::bail!("CALENDAR_DEFAULT_LOCALE is set but empty");
        }

        Ok(Self {
            default_locale,

            // Extra JSON record files, registered after the built-ins
            locales_dir: optional_path("CALENDAR_LOCALES_DIR"),

            editor_config_path: optional_path("EDITOR_CONFIG_PATH"),
        })
    }

    /// Build the registry: built-in tables first, then `locales_dir`.
    pub fn build_registry(&self) -> Result<LocaleRegistry> {
        let mut registry = LocaleRegistry::with_builtin_locales(&self.default_locale);

        if let Some(dir) = &self.locales_dir {
            let loaded = registry
                .load_dir(dir)
                .with_context(|| format!("Failed to load locales from {}", dir.display()))?;
            info!("Registered {} extra locales", loaded);
        }

        Ok(registry)
    }

    /// Editor settings from `editor_config_path`, or the CPS profile.
    pub fn load_editor_config(&self) -> Result<EditorConfig> {
        match &self.editor_config_path {
            Some(path) => EditorConfig::load_from_path(path),
            None => Ok(EditorConfig::default()),
        }
    }
}

fn optional_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
