//! Port definitions — interfaces the infrastructure layer implements

pub mod advisor_gateway;
pub mod catalog_source;
