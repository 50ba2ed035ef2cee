//! Backend REST API adapter
//!
//! Implements the application ports against the poliscope backend:
//! `CatalogSource` over `GET /policies` and `AdvisorGateway` over
//! `POST /gemini`.

pub mod client;
pub mod error;
pub mod types;
