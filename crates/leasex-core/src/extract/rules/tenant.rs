//! Tenant name extraction for Hebrew lease documents.

use regex::Regex;
use tracing::{debug, trace};

use super::patterns::TENANT_PATTERNS;
use super::FieldExtractor;

/// Shortest accepted name, in characters.
const MIN_NAME_CHARS: usize = 3;

/// Tenant name extractor.
///
/// Patterns are tried in priority order and the first acceptable match
/// wins; later patterns are not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantExtractor;

impl TenantExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn accepted(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let name = caps.get(1)?.as_str().trim();
    if name.chars().count() < MIN_NAME_CHARS {
        trace!("Rejecting short tenant match {:?}", name);
        return None;
    }
    Some(name.to_string())
}

impl FieldExtractor for TenantExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for (priority, pattern) in TENANT_PATTERNS.iter().enumerate() {
            if let Some(name) = accepted(pattern, text) {
                debug!("Tenant matched by pattern {}", priority);
                return Some(name);
            }
        }
        None
    }

    /// Every pattern's accepted match, highest priority first.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        TENANT_PATTERNS
            .iter()
            .filter_map(|pattern| accepted(pattern, text))
            .collect()
    }
}

/// Extract the tenant name, if any pattern yields one.
pub fn extract_tenant(text: &str) -> Option<String> {
    TenantExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tenant_label() {
        let text = "השוכר: דנה לוי\nתאריך: 1/1/2025";
        assert_eq!(extract_tenant(text), Some("דנה לוי".to_string()));
    }

    #[test]
    fn test_tenant_name_label() {
        let text = "שם השוכר: תומר אשכנזי, ת.ז. 012345678";
        assert_eq!(extract_tenant(text), Some("תומר אשכנזי".to_string()));
    }

    #[test]
    fn test_label_beats_earlier_lower_priority_match() {
        let text = "הסכם זה נערך בין המשכיר לבין: נוף מנדל\nמר ישראל ישראלי\nהשוכר: ליעד גרושקה";
        assert_eq!(extract_tenant(text), Some("ליעד גרושקה".to_string()));
    }

    #[test]
    fn test_between_on_next_line() {
        let text = "בין: חברת נכסים בע\"מ\nלבין:\n  רעות כהן\nכתובת";
        assert_eq!(extract_tenant(text), Some("רעות כהן".to_string()));
    }

    #[test]
    fn test_honorific() {
        let text = "חוזה שכירות\nגב' מיכל לוי, ת.ז. 1234";
        assert_eq!(extract_tenant(text), Some("מיכל לוי".to_string()));

        let text = "מר. אמיר עזר / משרד";
        assert_eq!(extract_tenant(text), Some("אמיר עזר".to_string()));
    }

    #[test]
    fn test_honorific_inside_word_is_ignored() {
        assert_eq!(extract_tenant("הוא אמר לי דבר"), None);
    }

    #[test]
    fn test_stops_at_separators() {
        let text = "השוכר: אבי כהן/שותפים";
        assert_eq!(extract_tenant(text), Some("אבי כהן".to_string()));
    }

    #[test]
    fn test_long_name_is_capped() {
        let name = "א".repeat(60);
        let text = format!("השוכר: {}", name);
        assert_eq!(extract_tenant(&text).map(|n| n.chars().count()), Some(40));
    }

    #[test]
    fn test_short_match_falls_through_to_next_pattern() {
        // Only whitespace and "א" follow the label: trimmed to one char.
        let text = "השוכר:   א\nלבין: דנה לוי";
        assert_eq!(extract_tenant(text), Some("דנה לוי".to_string()));
    }

    #[test]
    fn test_extract_all_in_priority_order() {
        let text = "מר ישראל ישראלי\nלבין: נוף מנדל\nהשוכר: ליעד גרושקה";
        let all = TenantExtractor::new().extract_all(text);
        assert_eq!(all, vec!["ליעד גרושקה", "נוף מנדל", "ישראל ישראלי"]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_tenant(""), None);
        assert_eq!(extract_tenant("חוזה שכירות בלתי מוגנת"), None);
    }

    #[test]
    fn test_idempotent() {
        let text = "השוכר: דנה לוי";
        assert_eq!(extract_tenant(text), extract_tenant(text));
    }
}
