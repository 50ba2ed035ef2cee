//! Advisor chat sessions and canned content

pub mod entities;
pub mod greeting;
pub mod suggestions;
