//! Policy domain entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insurance product category (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Health,
    Term,
    Motor,
}

impl PolicyType {
    /// All categories, in display order.
    pub fn all() -> [PolicyType; 3] {
        [PolicyType::Health, PolicyType::Term, PolicyType::Motor]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Health => "Health",
            PolicyType::Term => "Term",
            PolicyType::Motor => "Motor",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Health" | "health" => Ok(PolicyType::Health),
            "Term" | "term" => Ok(PolicyType::Term),
            "Motor" | "motor" => Ok(PolicyType::Motor),
            other => Err(format!("unknown policy type: {}", other)),
        }
    }
}

/// An insurance product record (Entity)
///
/// Immutable once loaded: created by the catalog fetch or the static
/// fallback at startup, never mutated, replaced wholesale when the backend
/// responds. Identity is by `id` — all set/lookup operations use id
/// equality, never whole-object equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub policy_type: PolicyType,
    pub company: String,
    pub name: String,
    pub short_description: String,
    /// Human-formatted range, e.g. "5,000 - 20,000 / year".
    pub price_range: String,
    pub must_have: Vec<String>,
    pub good_to_have: Vec<String>,
    pub add_ons: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    /// Regulator product identifier, forwarded in advisor requests.
    pub product_uin: Option<String>,
}

impl Policy {
    /// Feature list for one of the three comparison categories.
    pub fn features(&self, category: FeatureCategory) -> &[String] {
        match category {
            FeatureCategory::MustHave => &self.must_have,
            FeatureCategory::GoodToHave => &self.good_to_have,
            FeatureCategory::AddOn => &self.add_ons,
        }
    }
}

/// The three list-valued feature categories shown in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    MustHave,
    GoodToHave,
    AddOn,
}

impl FeatureCategory {
    pub fn all() -> [FeatureCategory; 3] {
        [
            FeatureCategory::MustHave,
            FeatureCategory::GoodToHave,
            FeatureCategory::AddOn,
        ]
    }

    /// Row-group heading in the comparison table.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureCategory::MustHave => "Must Have",
            FeatureCategory::GoodToHave => "Good To Have",
            FeatureCategory::AddOn => "Add On",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_roundtrip() {
        for pt in PolicyType::all() {
            assert_eq!(pt.as_str().parse::<PolicyType>().unwrap(), pt);
        }
    }

    #[test]
    fn test_policy_type_unknown_is_err() {
        assert!("Travel".parse::<PolicyType>().is_err());
    }

    #[test]
    fn test_feature_category_labels() {
        assert_eq!(FeatureCategory::MustHave.label(), "Must Have");
        assert_eq!(FeatureCategory::GoodToHave.label(), "Good To Have");
        assert_eq!(FeatureCategory::AddOn.label(), "Add On");
    }
}
