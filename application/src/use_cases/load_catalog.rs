//! Catalog loading with static fallback
//!
//! The UI renders from the fallback catalog immediately; this use case
//! fetches the backend catalog and swaps it in wholesale when the fetch
//! yields anything. An empty result (failure or genuinely no data) keeps
//! the fallback and flags the load so the UI can show a notice.

use crate::ports::catalog_source::CatalogSource;
use poliscope_domain::Policy;
use tracing::info;

/// Outcome of a catalog load.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub policies: Vec<Policy>,
    /// True when the backend produced nothing and the fallback is in use.
    pub from_fallback: bool,
}

/// Fetches the catalog, falling back to the static set.
pub struct LoadCatalogUseCase<S: CatalogSource> {
    source: S,
    fallback: Vec<Policy>,
}

impl<S: CatalogSource> LoadCatalogUseCase<S> {
    pub fn new(source: S, fallback: Vec<Policy>) -> Self {
        Self { source, fallback }
    }

    pub async fn execute(&self) -> CatalogLoad {
        let fetched = self.source.list_policies().await;
        if fetched.is_empty() {
            info!("no policies from backend, using fallback catalog");
            CatalogLoad {
                policies: self.fallback.clone(),
                from_fallback: true,
            }
        } else {
            info!(count = fetched.len(), "loaded policies from backend");
            CatalogLoad {
                policies: fetched,
                from_fallback: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use poliscope_domain::PolicyType;

    struct FixedSource(Vec<Policy>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn list_policies(&self) -> Vec<Policy> {
            self.0.clone()
        }
    }

    fn policy(id: &str) -> Policy {
        Policy {
            id: id.into(),
            policy_type: PolicyType::Health,
            company: "Co".into(),
            name: id.into(),
            short_description: String::new(),
            price_range: String::new(),
            must_have: vec![],
            good_to_have: vec![],
            add_ons: vec![],
            rating: 4.0,
            reviews_count: 0,
            product_uin: None,
        }
    }

    #[tokio::test]
    async fn test_backend_catalog_replaces_fallback() {
        let use_case =
            LoadCatalogUseCase::new(FixedSource(vec![policy("remote")]), vec![policy("local")]);
        let load = use_case.execute().await;
        assert!(!load.from_fallback);
        assert_eq!(load.policies[0].id, "remote");
    }

    #[tokio::test]
    async fn test_empty_backend_keeps_fallback() {
        let use_case = LoadCatalogUseCase::new(FixedSource(vec![]), vec![policy("local")]);
        let load = use_case.execute().await;
        assert!(load.from_fallback);
        assert_eq!(load.policies[0].id, "local");
    }
}
