//! Locale record: every string the calendar widget shows for one language.

use crate::i18n::date_format;
use crate::i18n::tooltip::TooltipKey;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of entries in a calendar-wrap day table (seven days plus Sunday again).
pub const WRAPPED_DAY_COUNT: usize = 8;

/// Number of days in a week.
pub const WEEK_LENGTH: usize = 7;

/// Number of entries in a month table.
pub const MONTH_COUNT: usize = 12;

/// The translated strings and date-format patterns for one locale code.
///
/// `day_names` follows the calendar-wrap convention: Sunday first, then
/// Monday to Saturday, then Sunday again, so the first and last entries
/// are equal. `month_names` is January-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    /// Locale code (e.g. "de", "sv"), the registry key
    pub code: String,

    /// Sunday-first day labels, Sunday repeated at the end
    pub day_names: Vec<String>,

    /// January-first month labels
    pub month_names: Vec<String>,

    /// Display string for each tooltip key
    #[serde(default)]
    pub tooltips: BTreeMap<TooltipKey, String>,

    /// Pattern used to write a picked date into the input field
    pub default_date_format: String,

    /// Pattern used for the date shown in the status tooltip
    pub tooltip_date_format: String,
}

impl LocaleRecord {
    /// Look up a tooltip by its wire name.
    ///
    /// Unknown keys and keys the record does not define both read as the
    /// empty string; a missing tooltip is cosmetic, not an error.
    pub fn tooltip(&self, key: &str) -> &str {
        TooltipKey::from_name(key)
            .map(|key| self.tooltip_for(key))
            .unwrap_or("")
    }

    /// Look up a tooltip by typed key, or `""` if the record lacks it.
    pub fn tooltip_for(&self, key: TooltipKey) -> &str {
        self.tooltips.get(&key).map(String::as_str).unwrap_or("")
    }

    /// The seven distinct week days, Sunday first.
    pub fn week_days(&self) -> &[String] {
        let end = self.day_names.len().min(WEEK_LENGTH);
        &self.day_names[..end]
    }

    /// Full name of a week day, or `""` if the table is short.
    pub fn day_name(&self, weekday: Weekday) -> &str {
        self.day_names
            .get(weekday.num_days_from_sunday() as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Full name of a month (1 = January), or `""` if out of range.
    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|index| self.month_names.get(index as usize))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Format `date` with this record's `default_date_format`.
    pub fn format_default(&self, date: NaiveDate) -> String {
        date_format::format_date(self, &self.default_date_format, date)
    }

    /// Format `date` with this record's `tooltip_date_format`.
    pub fn format_tooltip(&self, date: NaiveDate) -> String {
        date_format::format_date(self, &self.tooltip_date_format, date)
    }

    /// Whether the day table wraps (first entry repeated as the last).
    pub fn has_wrapped_days(&self) -> bool {
        self.day_names.len() == WRAPPED_DAY_COUNT
            && self.day_names.first() == self.day_names.last()
    }
}
