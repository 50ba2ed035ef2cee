//! Domain layer for poliscope
//!
//! This crate contains the core business logic, entities, and value objects:
//! policy records and their filtering/sorting, the comparison set and
//! comparison table, and advisor chat sessions. It has no dependencies on
//! infrastructure or presentation concerns.

pub mod chat;
pub mod comparison;
pub mod policy;

// Re-export commonly used types
pub use chat::{
    entities::{
        ChatMessage, ChatSession, MessageId, Sender, ADVISOR_ERROR_RESPONSE, DEFAULT_TITLE,
        NO_POLICY_RESPONSE, PLACEHOLDER_TEXT,
    },
    greeting::{initial_greeting, GreetingContext},
    suggestions::suggested_questions,
};
pub use comparison::{
    set::{ComparisonOutcome, ComparisonSet, CAP_FEEDBACK, MAX_COMPARE},
    table::{CellValue, ComparisonTable, ListRow, ListSection, ScalarRow},
};
pub use policy::{
    entities::{FeatureCategory, Policy, PolicyType},
    price::PriceBounds,
    sort::{filter_by_type, sort_policies, SortOption},
};
