//! Advisor gateway port
//!
//! Defines the interface for the remote language-model advisory endpoint.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use poliscope_domain::{ChatMessage, Policy};
use thiserror::Error;

/// Errors that can occur when asking the advisor
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// A question routed to the advisor, with the policy in focus and the
/// prior transcript as conversational context.
#[derive(Debug, Clone)]
pub struct AdvisorQuestion {
    pub policy: Policy,
    pub question: String,
    pub history: Vec<ChatMessage>,
}

/// Answer returned by the advisor endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorReply {
    pub response: String,
    pub follow_up_questions: Vec<String>,
}

/// Gateway for advisor communication
///
/// Unlike the catalog listing (which degrades to an empty list), a failed
/// advisor call is an `Err` the caller must handle explicitly — the chat
/// dispatch turns it into the fixed error message.
#[async_trait]
pub trait AdvisorGateway: Send + Sync {
    async fn ask(&self, question: AdvisorQuestion) -> Result<AdvisorReply, GatewayError>;
}
