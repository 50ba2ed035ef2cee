//! Catalog filtering and sorting

use super::entities::{Policy, PolicyType};
use super::price::PriceBounds;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Rating, high to low (listing default)
    #[default]
    RatingHigh,
    /// Rating, low to high
    RatingLow,
    /// Minimum parsed price, low to high
    PriceLow,
    /// Maximum parsed price, high to low
    PriceHigh,
}

impl SortOption {
    pub fn all() -> [SortOption; 4] {
        [
            SortOption::RatingHigh,
            SortOption::RatingLow,
            SortOption::PriceLow,
            SortOption::PriceHigh,
        ]
    }

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::RatingHigh => "Rating (High to Low)",
            SortOption::RatingLow => "Rating (Low to High)",
            SortOption::PriceLow => "Price (Low to High)",
            SortOption::PriceHigh => "Price (High to Low)",
        }
    }

    /// Cycle to the next option, wrapping.
    pub fn next(&self) -> SortOption {
        match self {
            SortOption::RatingHigh => SortOption::RatingLow,
            SortOption::RatingLow => SortOption::PriceLow,
            SortOption::PriceLow => SortOption::PriceHigh,
            SortOption::PriceHigh => SortOption::RatingHigh,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating-high" => Ok(SortOption::RatingHigh),
            "rating-low" => Ok(SortOption::RatingLow),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            other => Err(format!("unknown sort option: {}", other)),
        }
    }
}

/// Subset of the catalog matching one policy type, in catalog order.
pub fn filter_by_type(catalog: &[Policy], policy_type: PolicyType) -> Vec<Policy> {
    catalog
        .iter()
        .filter(|p| p.policy_type == policy_type)
        .cloned()
        .collect()
}

/// Sort a filtered listing. The sort is stable, so ties keep their
/// catalog order, and records whose price range fails to parse sort
/// after every parsed value.
pub fn sort_policies(policies: &mut [Policy], option: SortOption) {
    match option {
        SortOption::RatingHigh => {
            policies.sort_by(|a, b| cmp_f64(b.rating, a.rating));
        }
        SortOption::RatingLow => {
            policies.sort_by(|a, b| cmp_f64(a.rating, b.rating));
        }
        SortOption::PriceLow => {
            policies.sort_by(|a, b| {
                cmp_bound(
                    PriceBounds::parse(&a.price_range).map(|p| p.min),
                    PriceBounds::parse(&b.price_range).map(|p| p.min),
                )
            });
        }
        SortOption::PriceHigh => {
            policies.sort_by(|a, b| {
                cmp_bound(
                    PriceBounds::parse(&b.price_range).map(|p| p.max),
                    PriceBounds::parse(&a.price_range).map(|p| p.max),
                )
            });
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// `None` (unparseable price) orders after any parsed bound.
fn cmp_bound(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(id: &str, policy_type: PolicyType, rating: f64, price_range: &str) -> Policy {
        Policy {
            id: id.into(),
            policy_type,
            company: format!("{} Co", id),
            name: format!("{} Plan", id),
            short_description: String::new(),
            price_range: price_range.into(),
            must_have: vec![],
            good_to_have: vec![],
            add_ons: vec![],
            rating,
            reviews_count: 100,
            product_uin: None,
        }
    }

    fn sample_catalog() -> Vec<Policy> {
        vec![
            policy("h1", PolicyType::Health, 4.5, "5,000 - 20,000 / year"),
            policy("h2", PolicyType::Health, 4.2, "8,000 - 30,000 / year"),
            policy("t1", PolicyType::Term, 4.8, "3,000 - 15,000 / year"),
            policy("m1", PolicyType::Motor, 4.0, "2,500 - 10,000 / year"),
            policy("h3", PolicyType::Health, 4.2, "4,000 - 12,000 / year"),
        ]
    }

    #[test]
    fn test_filter_returns_only_matching_type() {
        let catalog = sample_catalog();
        let health = filter_by_type(&catalog, PolicyType::Health);
        assert_eq!(health.len(), 3);
        assert!(health.iter().all(|p| p.policy_type == PolicyType::Health));
    }

    #[test]
    fn test_filtered_subsets_reconstruct_catalog() {
        let catalog = sample_catalog();
        let mut reconstructed: Vec<String> = PolicyType::all()
            .iter()
            .flat_map(|t| filter_by_type(&catalog, *t))
            .map(|p| p.id)
            .collect();
        reconstructed.sort();
        let mut original: Vec<String> = catalog.iter().map(|p| p.id.clone()).collect();
        original.sort();
        assert_eq!(reconstructed, original);
    }

    #[test]
    fn test_rating_sorts_are_exact_reverses_without_ties() {
        let mut desc = vec![
            policy("a", PolicyType::Health, 4.5, "1 - 2"),
            policy("b", PolicyType::Health, 4.1, "1 - 2"),
            policy("c", PolicyType::Health, 4.9, "1 - 2"),
        ];
        let mut asc = desc.clone();
        sort_policies(&mut desc, SortOption::RatingHigh);
        sort_policies(&mut asc, SortOption::RatingLow);
        let desc_ids: Vec<_> = desc.iter().map(|p| p.id.clone()).collect();
        let mut asc_ids: Vec<_> = asc.iter().map(|p| p.id.clone()).collect();
        asc_ids.reverse();
        assert_eq!(desc_ids, asc_ids);
    }

    #[test]
    fn test_rating_sort_is_stable_on_ties() {
        let mut listing = vec![
            policy("first", PolicyType::Health, 4.2, "1 - 2"),
            policy("second", PolicyType::Health, 4.2, "1 - 2"),
            policy("third", PolicyType::Health, 4.2, "1 - 2"),
        ];
        sort_policies(&mut listing, SortOption::RatingHigh);
        let ids: Vec<_> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_price_low_orders_by_min_bound() {
        let catalog = sample_catalog();
        let mut health = filter_by_type(&catalog, PolicyType::Health);
        sort_policies(&mut health, SortOption::PriceLow);
        let mins: Vec<_> = health
            .iter()
            .map(|p| PriceBounds::parse(&p.price_range).unwrap().min)
            .collect();
        let mut sorted = mins.clone();
        sorted.sort();
        assert_eq!(mins, sorted);
        assert_eq!(health[0].id, "h3");
    }

    #[test]
    fn test_price_high_orders_by_max_bound_descending() {
        let mut listing = sample_catalog();
        sort_policies(&mut listing, SortOption::PriceHigh);
        assert_eq!(listing[0].id, "h2"); // max 30,000
        assert_eq!(listing.last().unwrap().id, "m1"); // max 10,000
    }

    #[test]
    fn test_unparseable_price_sinks_to_end() {
        let mut listing = vec![
            policy("odd", PolicyType::Health, 4.0, "Contact us"),
            policy("a", PolicyType::Health, 4.0, "5,000 - 20,000 / year"),
            policy("weird", PolicyType::Health, 4.0, "cheap - pricey"),
            policy("b", PolicyType::Health, 4.0, "2,000 - 9,000 / year"),
        ];
        sort_policies(&mut listing, SortOption::PriceLow);
        let ids: Vec<_> = listing.iter().map(|p| p.id.as_str()).collect();
        // Unparseable entries keep their relative order at the end
        assert_eq!(ids, vec!["b", "a", "odd", "weird"]);
    }

    #[test]
    fn test_sort_option_cycle_covers_all() {
        let mut seen = vec![SortOption::default()];
        let mut cur = SortOption::default();
        for _ in 0..3 {
            cur = cur.next();
            seen.push(cur);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(cur.next(), SortOption::default());
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("price-low".parse::<SortOption>().unwrap(), SortOption::PriceLow);
        assert!("alphabetical".parse::<SortOption>().is_err());
    }
}
