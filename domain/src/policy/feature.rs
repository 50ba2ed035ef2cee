//! Feature entry helpers
//!
//! Feature lists hold free-form strings that optionally follow a
//! "Label: Value" convention, e.g. "Room Rent: Single AC Room". The
//! comparison table keys rows by the label part and shows the value part
//! in each cell.

/// The label portion of a feature entry: everything before the first
/// colon, or the whole entry when there is none.
pub fn label(entry: &str) -> &str {
    match entry.split_once(':') {
        Some((l, _)) => l.trim(),
        None => entry,
    }
}

/// The value portion of a feature entry, if any.
pub fn value(entry: &str) -> Option<&str> {
    entry.split_once(':').map(|(_, v)| v.trim())
}

/// Whether `entry` matches a row keyed by `row_entry`: either the exact
/// string, or a "Label: Value" entry whose label equals the row entry.
pub fn matches(entry: &str, row_entry: &str) -> bool {
    entry == row_entry || entry.starts_with(&format!("{}:", row_entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_value() {
        assert_eq!(label("Room Rent: Single AC Room"), "Room Rent");
    }

    #[test]
    fn test_label_without_value() {
        assert_eq!(label("Lifelong Renewal."), "Lifelong Renewal.");
    }

    #[test]
    fn test_value_extraction() {
        assert_eq!(value("Copayment: 10%"), Some("10%"));
        assert_eq!(value("Copayment."), None);
    }

    #[test]
    fn test_matches_exact_and_prefixed() {
        assert!(matches("Room Rent", "Room Rent"));
        assert!(matches("Room Rent: Single AC Room", "Room Rent"));
        assert!(!matches("Room Rental: x", "Room Rent"));
    }
}
