//! Side-by-side policy comparison

pub mod set;
pub mod table;
