//! Screen renderers
//!
//! One module per screen, each exposing a `render` function that draws
//! into the body region of the main layout.

pub mod auth;
pub mod chat;
pub mod detail;
pub mod home;
pub mod listing;
pub mod payment;
pub mod upload;
