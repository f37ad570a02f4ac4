//! Rule-based field extractors for Hebrew lease documents.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod property;
pub mod tenant;

pub use amounts::{extract_amounts, format_grouped_amount, parse_grouped_amount, AmountExtractor};
pub use dates::{extract_dates, DateExtractor};
pub use property::property_label;
pub use tenant::{extract_tenant, TenantExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// True when `text[start..end]` is not glued to further ASCII digits, so
/// `112/03/2025` does not yield `12/03/2025`.
pub(crate) fn digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_digit()) && !after.is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounded() {
        let text = "a12b";
        assert!(digit_bounded(text, 1, 3));
        assert!(!digit_bounded("112", 1, 3));
        assert!(!digit_bounded("121", 0, 2));
        assert!(digit_bounded("12", 0, 2));
        assert!(digit_bounded("ש12ח", 2, 4));
    }
}
