//! Price-range parsing
//!
//! Catalog records carry the premium as a human-formatted string such as
//! "5,000 - 20,000 / year". Sorting needs numeric bounds, so the string is
//! split on the first dash and each side is reduced to its digits.

/// Parsed numeric bounds of a `price_range` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

impl PriceBounds {
    /// Parse bounds out of a free-text price range.
    ///
    /// Returns `None` when the string has no dash or either side has no
    /// digits. Callers sort `None` after every parsed value, so records
    /// with unusable price text sink to the end of price-ordered lists.
    pub fn parse(price_range: &str) -> Option<PriceBounds> {
        let (lo, hi) = price_range.split_once('-')?;
        let min = digits(lo)?;
        let max = digits(hi)?;
        Some(PriceBounds { min, max })
    }
}

/// Strip everything but ASCII digits and parse the remainder.
fn digits(s: &str) -> Option<u64> {
    let filtered: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if filtered.is_empty() {
        return None;
    }
    filtered.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typical_range() {
        let bounds = PriceBounds::parse("5,000 - 20,000 / year").unwrap();
        assert_eq!(bounds.min, 5000);
        assert_eq!(bounds.max, 20000);
    }

    #[test]
    fn test_parse_unspaced_range() {
        let bounds = PriceBounds::parse("1,500-5,000 / year").unwrap();
        assert_eq!(bounds.min, 1500);
        assert_eq!(bounds.max, 5000);
    }

    #[test]
    fn test_parse_no_dash_is_none() {
        assert_eq!(PriceBounds::parse("Contact us for pricing"), None);
    }

    #[test]
    fn test_parse_no_digits_is_none() {
        assert_eq!(PriceBounds::parse("cheap - expensive"), None);
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(PriceBounds::parse(""), None);
    }

    #[test]
    fn test_trailing_text_ignored() {
        // "/ year" on the max side must not leak into the digits
        let bounds = PriceBounds::parse("7,000 - 25,000 / year").unwrap();
        assert_eq!(bounds.max, 25000);
    }
}
