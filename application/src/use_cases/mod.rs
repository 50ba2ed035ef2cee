//! Application use cases

pub mod chat;
pub mod load_catalog;
