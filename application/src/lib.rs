//! Application layer for poliscope
//!
//! This crate contains use cases, port definitions, and the session store.
//! It depends only on the domain layer.

pub mod ports;
pub mod session_store;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    advisor_gateway::{AdvisorGateway, AdvisorQuestion, AdvisorReply, GatewayError},
    catalog_source::CatalogSource,
};
pub use session_store::SessionStore;
pub use use_cases::chat::{
    advisor_task, begin_exchange, AdvisorEvent, AdvisorRequest, DispatchEpoch, ExchangeStart,
};
pub use use_cases::load_catalog::{CatalogLoad, LoadCatalogUseCase};
