//! Tooltip keys: the closed set of calendar UI labels.
//!
//! Every locale record maps each of these keys to a display string. The
//! string form of a key (e.g. `"PREV_MONTH"`) is what the calendar widget
//! asks for, so keys parse from and print to that form.

use crate::error::LocaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language-independent identifier for a calendar UI label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TooltipKey {
    Toggle,
    PrevYear,
    PrevMonth,
    GoToday,
    NextMonth,
    NextYear,
    SelDate,
    DragToMove,
    PartToday,
    MonFirst,
    SunFirst,
    Close,
    Today,
    Wk,
}

impl TooltipKey {
    /// Every key, in the order the widget's tables declare them.
    pub const ALL: [TooltipKey; 14] = [
        TooltipKey::Toggle,
        TooltipKey::PrevYear,
        TooltipKey::PrevMonth,
        TooltipKey::GoToday,
        TooltipKey::NextMonth,
        TooltipKey::NextYear,
        TooltipKey::SelDate,
        TooltipKey::DragToMove,
        TooltipKey::PartToday,
        TooltipKey::MonFirst,
        TooltipKey::SunFirst,
        TooltipKey::Close,
        TooltipKey::Today,
        TooltipKey::Wk,
    ];

    /// Get the wire name of the key.
    ///
    /// # Returns
    /// The upper-case name used by the calendar widget (e.g. "PREV_YEAR").
    pub fn as_str(&self) -> &'static str {
        match self {
            TooltipKey::Toggle => "TOGGLE",
            TooltipKey::PrevYear => "PREV_YEAR",
            TooltipKey::PrevMonth => "PREV_MONTH",
            TooltipKey::GoToday => "GO_TODAY",
            TooltipKey::NextMonth => "NEXT_MONTH",
            TooltipKey::NextYear => "NEXT_YEAR",
            TooltipKey::SelDate => "SEL_DATE",
            TooltipKey::DragToMove => "DRAG_TO_MOVE",
            TooltipKey::PartToday => "PART_TODAY",
            TooltipKey::MonFirst => "MON_FIRST",
            TooltipKey::SunFirst => "SUN_FIRST",
            TooltipKey::Close => "CLOSE",
            TooltipKey::Today => "TODAY",
            TooltipKey::Wk => "WK",
        }
    }

    /// Look a key up by its wire name, without allocating an error.
    ///
    /// # Returns
    /// * `Some(TooltipKey)` if `name` is one of the enumerated keys
    /// * `None` otherwise (matching is case-sensitive)
    pub fn from_name(name: &str) -> Option<TooltipKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for TooltipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TooltipKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LocaleError::UnknownTooltipKey(s.to_string()))
    }
}
