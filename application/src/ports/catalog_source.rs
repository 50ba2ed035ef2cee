//! Catalog source port

use async_trait::async_trait;
use poliscope_domain::Policy;

/// Source of policy records.
///
/// Listing is deliberately infallible: any transport or decode failure is
/// logged by the adapter and surfaces as an empty list, so callers treat
/// "empty" as either no data or failure and fall back to the static
/// catalog. This asymmetry with [`AdvisorGateway`](super::advisor_gateway::AdvisorGateway)
/// is part of the contract.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch all policies (backend caps at 100).
    async fn list_policies(&self) -> Vec<Policy>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<S> {
    async fn list_policies(&self) -> Vec<Policy> {
        (**self).list_policies().await
    }
}
