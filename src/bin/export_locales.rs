use anyhow::{bail, Context, Result};
use calendar_locales::config::Config;
use calendar_locales::i18n::LocaleRegistry;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Whether `code` can be used as-is for a file name inside the output dir.
fn is_plain_file_stem(code: &str) -> bool {
    if code.is_empty() || code.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(code).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write every registered record to `<output_dir>/<code>.json`.
///
/// All codes are checked before anything is written, so a code that would
/// escape `output_dir` fails the export without touching the disk.
fn export_records(registry: &LocaleRegistry, output_dir: &Path) -> Result<usize> {
    let records = registry.records();

    let unsafe_codes: Vec<&str> = records
        .iter()
        .map(|record| record.code.as_str())
        .filter(|code| !is_plain_file_stem(code))
        .collect();
    if !unsafe_codes.is_empty() {
        bail!("Locale codes not usable as file names: {:?}", unsafe_codes);
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    // One file per code; the files load back with CALENDAR_LOCALES_DIR
    for record in &records {
        let path = output_dir.join(format!("{}.json", record.code));
        let json = serde_json::to_string_pretty(record)
            .with_context(|| format!("Failed to serialize locale '{}'", record.code))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(records.len())
}

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("export_locales=info".parse()?),
        )
        .init();

    info!("Starting locale export");

    let config = Config::from_env()?;
    let registry = config.build_registry()?;

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/locales"));

    let count = export_records(&registry, &output_dir)?;

    info!("✓ Exported {} locales to {}", count, output_dir.display());

    Ok(())
}
