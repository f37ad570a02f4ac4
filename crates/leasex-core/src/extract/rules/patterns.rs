//! Common regex patterns for Hebrew lease extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Hebrew month names and their numbers. March has two accepted spellings.
pub const HEBREW_MONTHS: [(&str, u32); 13] = [
    ("ינואר", 1),
    ("פברואר", 2),
    ("מרץ", 3),
    ("מרס", 3),
    ("אפריל", 4),
    ("מאי", 5),
    ("יוני", 6),
    ("יולי", 7),
    ("אוגוסט", 8),
    ("ספטמבר", 9),
    ("אוקטובר", 10),
    ("נובמבר", 11),
    ("דצמבר", 12),
];

/// Look up a Hebrew month name.
pub fn hebrew_month_number(name: &str) -> Option<u32> {
    HEBREW_MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// Currency markers: shekel sign, NIS, the ש"ח abbreviation (ASCII quote or
/// gershayim) and the words שקל / שקלים.
const CURRENCY_MARKER: &str = r#"(?:₪|(?i:NIS)|ש["״]ח|שקל(?:ים)?)"#;

/// Digits with optional thousands commas, never ending on a comma.
const MARKED_NUMBER: &str = r"(\d(?:[\d,]*\d)?)";

/// Free-standing number: comma-grouped, or at least three plain digits.
const BARE_NUMBER: &str = r"(\d{1,3}(?:,\d{3})+|\d{3,})";

lazy_static! {
    // D/M/YYYY or DD.MM.YYYY
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"(\d{1,2})[/.](\d{1,2})[/.](\d{4})"
    ).unwrap();

    // "14 אפריל 2025", also "14 באפריל 2025"
    pub static ref DATE_HEBREW_LONG: Regex = {
        let names: Vec<&str> = HEBREW_MONTHS.iter().map(|(name, _)| *name).collect();
        Regex::new(&format!(
            r"(\d{{1,2}})\s+(?:ב-?)?({})\s+(\d{{4}})",
            names.join("|")
        ))
        .unwrap()
    };

    // Marker, then the number in group 1.
    pub static ref AMOUNT_MARKER_BEFORE: Regex = Regex::new(&format!(
        r"{marker}\s*{number}",
        marker = CURRENCY_MARKER,
        number = MARKED_NUMBER,
    )).unwrap();

    // Number in group 1, then the marker. Scanned separately from
    // AMOUNT_MARKER_BEFORE so one marker can serve numbers on both sides.
    pub static ref AMOUNT_MARKER_AFTER: Regex = Regex::new(&format!(
        r"{number}\s*{marker}",
        marker = CURRENCY_MARKER,
        number = MARKED_NUMBER,
    )).unwrap();

    // Bare number in group 1.
    pub static ref AMOUNT_BARE: Regex = Regex::new(BARE_NUMBER).unwrap();

    // Tenant label patterns, highest priority first.
    pub static ref TENANT_PATTERNS: [Regex; 3] = [
        // "השוכר: ..." / "שם השוכר: ..."
        Regex::new(r"(?:שם השוכר|השוכר)[:\s]+([^\n\r,/]{3,40})").unwrap(),
        // "לבין: ..." (party introduction), possibly on the next line
        Regex::new(r"לבין[:\s]*([^\n\r,/]{3,40})").unwrap(),
        // honorifics: מר / גב' / גברת, not inside a longer word
        Regex::new(r#"(?:^|[^\p{L}])(?:גברת|גב['׳]|מר)[.\s]+([^\n\r,/]{3,40})"#).unwrap(),
    ];
}
