//! Bundled policy catalog
//!
//! The fallback catalog ships with the binary so every screen works
//! without a backend. Wire-to-domain normalization also lives here so
//! that only [`Policy`](poliscope_domain::Policy) values exist past the
//! ingestion boundary.

pub mod fallback;
pub mod normalize;

pub use fallback::fallback_policies;
