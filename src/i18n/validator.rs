//! Locale record validation.
//!
//! Lookups tolerate incomplete records, so defects in the data never show
//! up as runtime errors. This module is where they do show up: a report of
//! structural errors (wrong table sizes, broken day wrap) and completeness
//! warnings (missing tooltips, blank strings, patterns without codes).

use crate::i18n::date_format;
use crate::i18n::record::{LocaleRecord, MONTH_COUNT, WRAPPED_DAY_COUNT};
use crate::i18n::tooltip::TooltipKey;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural defects: the widget would show wrong or shifted labels
    pub errors: Vec<String>,

    /// Completeness defects: labels would be blank or untranslated
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale records.
pub struct LocaleValidator;

// Language subtag, optional region/script subtags: "de", "pt-BR", "zh_Hant"
static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl LocaleValidator {
    /// Check a record against the shape the calendar widget expects.
    ///
    /// Errors:
    /// - empty code
    /// - day table not seven days plus the Sunday wrap entry
    /// - wrap entry different from the first day
    /// - month table not twelve entries
    ///
    /// Warnings:
    /// - code that does not look like a language tag
    /// - each tooltip key the record does not define
    /// - blank day, month or tooltip strings
    /// - date-format patterns with no placeholder code
    pub fn validate(record: &LocaleRecord) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Code
        if record.code.is_empty() {
            report.errors.push("Locale code is empty".to_string());
        } else if !Self::is_language_tag(&record.code) {
            report.warnings.push(format!(
                "Locale code '{}' does not look like a language tag",
                record.code
            ));
        }

        // Day table
        if record.day_names.len() != WRAPPED_DAY_COUNT {
            report.errors.push(format!(
                "Day table has {} entries, expected {} (seven days plus Sunday again)",
                record.day_names.len(),
                WRAPPED_DAY_COUNT
            ));
        } else if record.day_names.first() != record.day_names.last() {
            report.errors.push(format!(
                "Day table does not wrap: first entry {:?}, last entry {:?}",
                record.day_names.first(),
                record.day_names.last()
            ));
        }
        Self::check_blank(&mut report, "Day name", &record.day_names);

        // Month table
        if record.month_names.len() != MONTH_COUNT {
            report.errors.push(format!(
                "Month table has {} entries, expected {}",
                record.month_names.len(),
                MONTH_COUNT
            ));
        }
        Self::check_blank(&mut report, "Month name", &record.month_names);

        // Tooltips
        for key in TooltipKey::ALL {
            match record.tooltips.get(&key) {
                None => report.warnings.push(format!("Missing tooltip {}", key)),
                Some(text) if text.trim().is_empty() => {
                    report.warnings.push(format!("Tooltip {} is blank", key))
                }
                Some(_) => {}
            }
        }

        // Date formats
        for (name, pattern) in [
            ("Default date format", &record.default_date_format),
            ("Tooltip date format", &record.tooltip_date_format),
        ] {
            if !date_format::has_placeholder(pattern) {
                report.warnings.push(format!(
                    "{} {:?} contains no date placeholder",
                    name, pattern
                ));
            }
        }

        report
    }

    fn is_language_tag(code: &str) -> bool {
        let regex = CODE_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$")
                .expect("valid locale code regex")
        });
        regex.is_match(code)
    }

    fn check_blank(report: &mut ValidationReport, label: &str, names: &[String]) {
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                report
                    .warnings
                    .push(format!("{} at position {} is blank", label, index));
            }
        }
    }
}
