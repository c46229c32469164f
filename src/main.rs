//! Inspect the calendar locale tables and the editor settings.
//!
//! Usage:
//!   calendar-locales show <code>               # Print the resolved record as JSON
//!   calendar-locales tooltip <code> <KEY>      # Print one tooltip
//!   calendar-locales format <code> <YYYY-MM-DD> # Render a date with both patterns
//!   calendar-locales validate                  # Check every registered record
//!   calendar-locales editor [toolbar-set]      # Print editor settings or one toolbar set
//!   calendar-locales metrics                   # Print lookup counters after a sample run
//!
//! Optional environment variables:
//! - CALENDAR_DEFAULT_LOCALE (defaults to en)
//! - CALENDAR_LOCALES_DIR
//! - EDITOR_CONFIG_PATH

use anyhow::{bail, Context, Result};
use calendar_locales::config::Config;
use calendar_locales::i18n::{LocaleRegistry, LocaleValidator, TooltipKey};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

fn print_usage() {
    println!(
        r#"Usage: calendar-locales <command> [args]

Commands:
  show <code>                Print the record <code> resolves to, as JSON
  tooltip <code> <KEY>       Print one tooltip string (empty if missing)
  format <code> <YYYY-MM-DD> Render a date with the locale's date formats
  validate                   Validate every registered locale record
  editor [toolbar-set]       Print the editor settings, or one toolbar set
  metrics                    Resolve every locale and tooltip, print counters
  help                       Show this message"#
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing argument <{}>", name))
}

/// A parsed command line. Parsing needs no configuration.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Show { code: &'a str },
    Tooltip { code: &'a str, key: &'a str },
    Format { code: &'a str, date: &'a str },
    Validate,
    Editor { toolbar_set: Option<&'a str> },
    Metrics,
    Help,
}

impl<'a> Command<'a> {
    fn parse(args: &'a [String]) -> Result<Self> {
        let Some(name) = args.get(1) else {
            return Ok(Command::Help);
        };

        let command = match name.as_str() {
            "show" => Command::Show {
                code: arg(args, 2, "code")?,
            },
            "tooltip" => Command::Tooltip {
                code: arg(args, 2, "code")?,
                key: arg(args, 3, "KEY")?,
            },
            "format" => Command::Format {
                code: arg(args, 2, "code")?,
                date: arg(args, 3, "date")?,
            },
            "validate" => Command::Validate,
            "editor" => Command::Editor {
                toolbar_set: args.get(2).map(String::as_str),
            },
            "metrics" => Command::Metrics,
            "--help" | "-h" | "help" => Command::Help,
            other => bail!("Unknown command: {}", other),
        };
        Ok(command)
    }
}

fn show_command(registry: &LocaleRegistry, code: &str) -> Result<()> {
    let record = registry.resolve(code);
    if record.code != code {
        warn!("Locale '{}' not registered, showing '{}'", code, record.code);
    }
    print_json(record)
}

fn tooltip_command(registry: &LocaleRegistry, code: &str, key: &str) -> Result<()> {
    let record = registry.resolve(code);
    println!("{}", registry.tooltip(record, key));
    Ok(())
}

#[derive(Serialize)]
struct FormattedDate<'a> {
    locale: &'a str,
    date: String,
    default_format: String,
    tooltip_format: String,
}

fn format_command(registry: &LocaleRegistry, code: &str, date: &str) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
    let record = registry.resolve(code);

    print_json(&FormattedDate {
        locale: &record.code,
        date: parsed.to_string(),
        default_format: record.format_default(parsed),
        tooltip_format: record.format_tooltip(parsed),
    })
}

fn validate_command(registry: &LocaleRegistry) -> Result<()> {
    let mut failed = Vec::new();

    for record in registry.records() {
        let report = LocaleValidator::validate(record);
        if report.is_clean() {
            info!("✓ {}", record.code);
            continue;
        }
        for error in &report.errors {
            println!("{}: error: {}", record.code, error);
        }
        for warning in &report.warnings {
            println!("{}: warning: {}", record.code, warning);
        }
        if report.has_errors() {
            failed.push(record.code.clone());
        }
    }

    if !failed.is_empty() {
        bail!("Validation failed for: {}", failed.join(", "));
    }
    info!("Validated {} locales", registry.len());
    Ok(())
}

fn editor_command(config: &Config, toolbar_set: Option<&str>) -> Result<()> {
    let editor = config.load_editor_config()?;
    match toolbar_set {
        Some(name) => {
            let rows = editor
                .toolbar_set(name)
                .with_context(|| format!("Unknown toolbar set '{}'", name))?;
            print_json(&rows)
        }
        None => print_json(&editor),
    }
}

fn metrics_command(registry: &LocaleRegistry) -> Result<()> {
    for code in registry.codes() {
        let record = registry.resolve(code);
        for key in TooltipKey::ALL {
            registry.tooltip(record, key.as_str());
        }
    }
    print_json(&registry.metrics().report())
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("calendar_locales=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;

    if let Command::Editor { toolbar_set } = command {
        return editor_command(&config, toolbar_set);
    }

    let registry = config.build_registry()?;

    match command {
        Command::Show { code } => show_command(&registry, code),
        Command::Tooltip { code, key } => tooltip_command(&registry, code, key),
        Command::Format { code, date } => format_command(&registry, code, date),
        Command::Validate => validate_command(&registry),
        Command::Metrics => metrics_command(&registry),
        Command::Editor { .. } | Command::Help => Ok(()),
    }
}
