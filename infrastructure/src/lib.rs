//! Infrastructure layer for poliscope
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the backend API client, the bundled
//! fallback catalog, and configuration file loading.

pub mod api;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use api::{
    client::ApiClient,
    error::{ApiError, Result},
    types::{AdvisorRequestBody, AdvisorResponseBody, BackendPolicy},
};
pub use catalog::{fallback_policies, normalize::normalize_policy};
pub use config::{ConfigLoader, FileApiConfig, FileCatalogConfig, FileConfig, FileUiConfig};
