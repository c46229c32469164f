//! Error types for the locale registry.
//!
//! Lookups never fail: unknown locales fall back to the default record and
//! unknown tooltip keys read as empty strings. These errors only cover
//! registration and loading record files from disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    /// A record was registered without a locale code.
    #[error("locale record has an empty code")]
    EmptyCode,

    /// A string did not name one of the enumerated tooltip keys.
    #[error("unknown tooltip key: '{0}'")]
    UnknownTooltipKey(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locale record {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
