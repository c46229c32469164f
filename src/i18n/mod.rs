//! Calendar localization: locale records and the registry that serves them.
//!
//! All calendar strings (day names, month names, tooltips and the two
//! date-format patterns) live here.
//!
//! # Architecture
//!
//! - `registry`: Locale lookup with fallback to the default locale
//! - `record`: The per-locale record the calendar widget consumes
//! - `tooltip`: Typed tooltip keys
//! - `tables`: Built-in locale tables compiled into the crate
//! - `date_format`: Rendering dates through a record's patterns
//! - `validator`: Data-completeness checks for records
//! - `metrics`: Lookup hit/fallback counters
//!
//! # Example
//!
//! ```rust
//! use calendar_locales::i18n::{tooltip, LocaleRegistry};
//!
//! let registry = LocaleRegistry::with_builtin_locales("en");
//!
//! let swedish = registry.resolve("sv");
//! assert_eq!(tooltip(swedish, "TOGGLE"), "Skifta första veckodag");
//!
//! // Unknown codes fall back to the default locale
//! assert_eq!(registry.resolve("xx").code, "en");
//! ```

pub mod date_format;
mod metrics;
mod record;
mod registry;
pub mod tables;
mod tooltip;
mod validator;

pub use metrics::{LookupMetrics, MetricsReport};
pub use record::{LocaleRecord, MONTH_COUNT, WEEK_LENGTH, WRAPPED_DAY_COUNT};
pub use registry::{load_record, tooltip, LocaleRegistry, DEFAULT_LOCALE};
pub use tooltip::TooltipKey;
pub use validator::{LocaleValidator, ValidationReport};
