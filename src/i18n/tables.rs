//! Built-in locale tables.
//!
//! These are the calendar tables shipped with the crate. Each one converts
//! into a [`LocaleRecord`] and is registered by
//! `LocaleRegistry::with_builtin_locales` in [`BUILTIN_TABLES`] order.

use crate::i18n::record::LocaleRecord;
use crate::i18n::tooltip::TooltipKey;

/// Static locale table, the compiled-in form of a `LocaleRecord`.
///
/// Tables follow the calendar-wrap convention: eight day names, Sunday
/// first and Sunday again at the end.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    /// Locale code (e.g. "de")
    pub code: &'static str,

    /// Sunday-first day names, Sunday repeated at the end
    pub day_names: [&'static str; 8],

    /// January-first month names
    pub month_names: [&'static str; 12],

    // ==================== Tooltips ====================
    /// TOGGLE: switch the first day of the week
    pub toggle: &'static str,

    /// PREV_YEAR
    pub prev_year: &'static str,

    /// PREV_MONTH
    pub prev_month: &'static str,

    /// GO_TODAY
    pub go_today: &'static str,

    /// NEXT_MONTH
    pub next_month: &'static str,

    /// NEXT_YEAR
    pub next_year: &'static str,

    /// SEL_DATE
    pub sel_date: &'static str,

    /// DRAG_TO_MOVE
    pub drag_to_move: &'static str,

    /// PART_TODAY: suffix appended to today's date, leading space included
    pub part_today: &'static str,

    /// MON_FIRST
    pub mon_first: &'static str,

    /// SUN_FIRST
    pub sun_first: &'static str,

    /// CLOSE
    pub close: &'static str,

    /// TODAY
    pub today: &'static str,

    /// WK: week-number column header
    pub wk: &'static str,

    // ==================== Date Formats ====================
    /// DEF_DATE_FORMAT
    pub default_date_format: &'static str,

    /// TT_DATE_FORMAT
    pub tooltip_date_format: &'static str,
}

impl LocaleTable {
    /// Pair each tooltip key with its string in this table.
    pub fn tooltips(&self) -> [(TooltipKey, &'static str); 14] {
        [
            (TooltipKey::Toggle, self.toggle),
            (TooltipKey::PrevYear, self.prev_year),
            (TooltipKey::PrevMonth, self.prev_month),
            (TooltipKey::GoToday, self.go_today),
            (TooltipKey::NextMonth, self.next_month),
            (TooltipKey::NextYear, self.next_year),
            (TooltipKey::SelDate, self.sel_date),
            (TooltipKey::DragToMove, self.drag_to_move),
            (TooltipKey::PartToday, self.part_today),
            (TooltipKey::MonFirst, self.mon_first),
            (TooltipKey::SunFirst, self.sun_first),
            (TooltipKey::Close, self.close),
            (TooltipKey::Today, self.today),
            (TooltipKey::Wk, self.wk),
        ]
    }
}

impl From<&LocaleTable> for LocaleRecord {
    fn from(table: &LocaleTable) -> Self {
        LocaleRecord {
            code: table.code.to_string(),
            day_names: table.day_names.iter().map(|s| s.to_string()).collect(),
            month_names: table.month_names.iter().map(|s| s.to_string()).collect(),
            tooltips: table
                .tooltips()
                .into_iter()
                .map(|(key, text)| (key, text.to_string()))
                .collect(),
            default_date_format: table.default_date_format.to_string(),
            tooltip_date_format: table.tooltip_date_format.to_string(),
        }
    }
}

// ==================== English ====================

/// English (default locale)
pub const ENGLISH: LocaleTable = LocaleTable {
    code: "en",
    day_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],

    toggle: "Toggle first day of week",
    prev_year: "Prev. year (hold for menu)",
    prev_month: "Prev. month (hold for menu)",
    go_today: "Go Today",
    next_month: "Next month (hold for menu)",
    next_year: "Next year (hold for menu)",
    sel_date: "Select date",
    drag_to_move: "Drag to move",
    part_today: " (today)",
    mon_first: "Display Monday first",
    sun_first: "Display Sunday first",
    close: "Close",
    today: "Today",
    wk: "wk",

    default_date_format: "y-mm-dd",
    tooltip_date_format: "D, M d",
};

// ==================== German ====================

/// German, older `lang/` table.
///
/// Registered before [`GERMAN`], so it is shadowed in the built-in set.
/// Its wording differs (lower-case "wo", "Gehe nach Heute").
pub const GERMAN_LEGACY: LocaleTable = LocaleTable {
    code: "de",
    day_names: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    month_names: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],

    toggle: "Wechseln ersten Tag der Woche ",
    prev_year: "Letztes Jahr (halten für Menü)",
    prev_month: "Letzter Monat (halten für Menü)",
    go_today: "Gehe nach Heute",
    next_month: "Next month (halten für Menü)",
    next_year: "Nächstes Jahr (halten für Menü)",
    sel_date: "Wähle Datum",
    drag_to_move: "Ziehe Maus ",
    part_today: " (heute)",
    mon_first: "Mondag zuerst",
    sun_first: "Sonntag zuerst",
    close: "Schliessen",
    today: "Heute",
    wk: "wo",

    default_date_format: "y-mm-dd",
    tooltip_date_format: "D, M d",
};

/// German, skin `calendar-lang/` table. Wins over [`GERMAN_LEGACY`].
pub const GERMAN: LocaleTable = LocaleTable {
    code: "de",
    day_names: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    month_names: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],

    toggle: "Wechsel des Wochenbeginns",
    prev_year: "vorh. Jahr (halten f. Menü)",
    prev_month: "vorh. Monat (halten f. Menü)",
    go_today: "Heute",
    next_month: "nächst. Monat (halten f. Menü)",
    next_year: "nächst. Jahr (halten f. Menü)",
    sel_date: "Datum wählen",
    drag_to_move: "Verschieben",
    part_today: " (heute)",
    mon_first: "Wochenanf. Montag",
    sun_first: "Wochenanf. Sonntag",
    close: "Schließen",
    today: "Heute",
    wk: "Wo",

    default_date_format: "y-mm-dd",
    tooltip_date_format: "D, M d",
};

// ==================== Hungarian ====================

/// Hungarian. Several tooltips were never translated upstream.
pub const HUNGARIAN: LocaleTable = LocaleTable {
    code: "hu",
    day_names: [
        "Vasárnap",
        "Hétfő",
        "Kedd",
        "Szerda",
        "Csütörtök",
        "Péntek",
        "Szombat",
        "Vasárnap",
    ],
    month_names: [
        "január",
        "február",
        "március",
        "április",
        "május",
        "június",
        "július",
        "augusztus",
        "szeptember",
        "október",
        "november",
        "december",
    ],

    toggle: "Toggle first day of week",
    prev_year: "Előző év (hold for menu)",
    prev_month: "Előző hónap (hold for menu)",
    go_today: "Mai napra ugrás",
    next_month: "Köv. hónap (hold for menu)",
    next_year: "Köv. év (hold for menu)",
    sel_date: "Válasszon dátumot",
    drag_to_move: "Drag to move",
    part_today: " (ma)",
    mon_first: "Hétfő legyen a hét első napja",
    sun_first: "Vasárnap legyen a hét első napja",
    close: "Bezár",
    today: "Ma",
    wk: "hét",

    default_date_format: "y-mm-dd",
    tooltip_date_format: "M d, D",
};

// ==================== Romanian ====================

/// Romanian
pub const ROMANIAN: LocaleTable = LocaleTable {
    code: "ro",
    day_names: [
        "Duminică",
        "Luni",
        "Marţi",
        "Miercuri",
        "Joi",
        "Vineri",
        "Sâmbătă",
        "Duminică",
    ],
    month_names: [
        "Ianuarie",
        "Februarie",
        "Martie",
        "Aprilie",
        "Mai",
        "Iunie",
        "Iulie",
        "August",
        "Septembrie",
        "Octombrie",
        "Noiembrie",
        "Decembrie",
    ],

    toggle: "Schimbă prima zi din săptămână",
    prev_year: "Anul precedent (lung pt menu)",
    prev_month: "Luna precedentă (lung pt menu)",
    go_today: "Data de azi",
    next_month: "Luna următoare (lung pt menu)",
    next_year: "Anul următor (lung pt menu)",
    sel_date: "Selectează data",
    drag_to_move: "Trage pentru a mişca",
    part_today: " (astăzi)",
    mon_first: "Prima zi -> Luni",
    sun_first: "Prima zi -> Duminică",
    close: "Închide",
    today: "Astăzi",
    wk: "wk",

    default_date_format: "dd-mm-y",
    tooltip_date_format: "D, d M",
};

// ==================== Swedish ====================

/// Swedish
pub const SWEDISH: LocaleTable = LocaleTable {
    code: "sv",
    day_names: [
        "Söndag",
        "Måndag",
        "Tisdag",
        "Onsdag",
        "Torsdag",
        "Fredag",
        "Lördag",
        "Söndag",
    ],
    month_names: [
        "Januari",
        "Februari",
        "Mars",
        "April",
        "Maj",
        "Juni",
        "Juli",
        "Augusti",
        "September",
        "Oktober",
        "November",
        "December",
    ],

    toggle: "Skifta första veckodag",
    prev_year: "Förra året (tryck för meny)",
    prev_month: "Förra månaden (tryck för meny)",
    go_today: "Gå till dagens datum",
    next_month: "Nästa månad (tryck för meny)",
    next_year: "Nästa år (tryck för meny)",
    sel_date: "Välj dag",
    drag_to_move: "Flytta fönstret",
    part_today: " (idag)",
    mon_first: "Visa Måndag först",
    sun_first: "Visa Söndag först",
    close: "Stäng fönstret",
    today: "Idag",
    wk: "wk",

    default_date_format: "y-mm-dd",
    tooltip_date_format: "DD, d MM y",
};

/// Built-in tables in registration order. Later entries overwrite earlier
/// ones with the same code.
pub const BUILTIN_TABLES: [&LocaleTable; 6] = [
    &ENGLISH,
    &GERMAN_LEGACY,
    &GERMAN,
    &HUNGARIAN,
    &ROMANIAN,
    &SWEDISH,
];
