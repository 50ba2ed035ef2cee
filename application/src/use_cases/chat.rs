//! Advisor chat dispatch
//!
//! The exchange is split in two so the UI stays single-writer:
//!
//! - [`begin_exchange`] runs synchronously against the session store:
//!   append the user message, insert the placeholder bot message, and
//!   either short-circuit (no policy in focus) or hand back an
//!   [`AdvisorRequest`] for the background task.
//! - [`advisor_task`] owns the gateway call and reports back with an
//!   [`AdvisorEvent`], which the owner applies via [`AdvisorEvent::apply`].
//!
//! Every request carries a [`DispatchEpoch`]. The owner bumps its epoch on
//! a full reset (navigating home), so replies that land after the
//! originating context is gone are dropped instead of mutating state.

use crate::ports::advisor_gateway::{
    AdvisorGateway, AdvisorQuestion, AdvisorReply, GatewayError,
};
use crate::session_store::SessionStore;
use poliscope_domain::{
    MessageId, Policy, Sender, ADVISOR_ERROR_RESPONSE, NO_POLICY_RESPONSE,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Generation counter guarding in-flight requests against full resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchEpoch(pub u64);

impl DispatchEpoch {
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// Work order for the background advisor task.
#[derive(Debug)]
pub struct AdvisorRequest {
    pub epoch: DispatchEpoch,
    pub session_id: String,
    pub placeholder_id: MessageId,
    pub question: AdvisorQuestion,
}

/// Completion report from the background advisor task.
#[derive(Debug)]
pub struct AdvisorEvent {
    pub epoch: DispatchEpoch,
    pub session_id: String,
    pub placeholder_id: MessageId,
    pub outcome: Result<AdvisorReply, GatewayError>,
}

impl AdvisorEvent {
    /// Apply this reply to the store.
    ///
    /// Dropped (returns false) when the epoch no longer matches or the
    /// placeholder message is gone. On gateway failure the placeholder
    /// becomes the fixed error message; the session is otherwise
    /// untouched.
    pub fn apply(self, store: &mut SessionStore, current_epoch: DispatchEpoch) -> bool {
        if self.epoch != current_epoch {
            debug!(session = %self.session_id, "dropping stale advisor reply");
            return false;
        }
        let Some(session) = store.get_mut(&self.session_id) else {
            return false;
        };
        match self.outcome {
            Ok(reply) => session.replace_text(
                self.placeholder_id,
                reply.response,
                reply.follow_up_questions,
            ),
            Err(err) => {
                warn!(error = %err, "advisor request failed");
                session.replace_text(self.placeholder_id, ADVISOR_ERROR_RESPONSE, Vec::new())
            }
        }
    }
}

/// Result of starting an exchange.
#[derive(Debug)]
pub struct ExchangeStart {
    pub user_message_id: MessageId,
    pub placeholder_id: MessageId,
    /// Present only when a network round-trip is needed.
    pub request: Option<AdvisorRequest>,
}

/// Record a user question in the session and decide whether to go out to
/// the advisor.
///
/// The conversational context sent outward is the transcript as it stood
/// before this question. With no policy in focus the placeholder is
/// resolved immediately with the canned no-policy response and no request
/// is produced.
pub fn begin_exchange(
    store: &mut SessionStore,
    session_id: &str,
    text: &str,
    focus: Option<&Policy>,
    epoch: DispatchEpoch,
) -> Option<ExchangeStart> {
    let session = store.get_mut(session_id)?;
    let history = session.messages().to_vec();
    let user_message_id = session.push(Sender::User, text);
    let placeholder_id = session.push_placeholder();

    let request = match focus {
        Some(policy) => Some(AdvisorRequest {
            epoch,
            session_id: session_id.to_string(),
            placeholder_id,
            question: AdvisorQuestion {
                policy: policy.clone(),
                question: text.to_string(),
                history,
            },
        }),
        None => {
            session.replace_text(placeholder_id, NO_POLICY_RESPONSE, Vec::new());
            None
        }
    };

    Some(ExchangeStart {
        user_message_id,
        placeholder_id,
        request,
    })
}

/// Background task owning the gateway: one in-flight question at a time,
/// reporting completions over `event_tx`.
pub async fn advisor_task<G: AdvisorGateway>(
    gateway: Arc<G>,
    mut request_rx: mpsc::UnboundedReceiver<AdvisorRequest>,
    event_tx: mpsc::UnboundedSender<AdvisorEvent>,
) {
    while let Some(request) = request_rx.recv().await {
        let outcome = gateway.ask(request.question).await;
        let event = AdvisorEvent {
            epoch: request.epoch,
            session_id: request.session_id,
            placeholder_id: request.placeholder_id,
            outcome,
        };
        if event_tx.send(event).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use poliscope_domain::{GreetingContext, PolicyType, PLACEHOLDER_TEXT};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn policy(id: &str) -> Policy {
        Policy {
            id: id.into(),
            policy_type: PolicyType::Health,
            company: "Co".into(),
            name: format!("{} Plan", id),
            short_description: String::new(),
            price_range: String::new(),
            must_have: vec![],
            good_to_have: vec![],
            add_ons: vec![],
            rating: 4.0,
            reviews_count: 0,
            product_uin: None,
        }
    }

    fn store_with_session() -> (SessionStore, String) {
        let mut store = SessionStore::new();
        let id = store.open_session(&GreetingContext {
            budget: 5000,
            ..Default::default()
        });
        (store, id)
    }

    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AdvisorGateway for CountingGateway {
        async fn ask(&self, _q: AdvisorQuestion) -> Result<AdvisorReply, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AdvisorReply {
                response: "answer".into(),
                follow_up_questions: vec![],
            })
        }
    }

    #[test]
    fn test_no_focus_substitutes_canned_reply_without_request() {
        let (mut store, id) = store_with_session();
        let start =
            begin_exchange(&mut store, &id, "help me", None, DispatchEpoch::default()).unwrap();
        assert!(start.request.is_none());

        let session = store.get(&id).unwrap();
        let last = session.messages().last().unwrap();
        assert_eq!(last.id, start.placeholder_id);
        assert_eq!(last.text, NO_POLICY_RESPONSE);
    }

    #[test]
    fn test_focus_produces_request_with_prior_history() {
        let (mut store, id) = store_with_session();
        let focus = policy("health-cocure");
        let start = begin_exchange(
            &mut store,
            &id,
            "what about copayment?",
            Some(&focus),
            DispatchEpoch::default(),
        )
        .unwrap();

        let request = start.request.unwrap();
        assert_eq!(request.question.policy.id, "health-cocure");
        // History holds only the greeting, not the new question
        assert_eq!(request.question.history.len(), 1);
        assert_eq!(
            store.get(&id).unwrap().messages().last().unwrap().text,
            PLACEHOLDER_TEXT
        );
    }

    #[test]
    fn test_success_replaces_placeholder_in_place() {
        let (mut store, id) = store_with_session();
        let focus = policy("p");
        let epoch = DispatchEpoch::default();
        let start = begin_exchange(&mut store, &id, "q", Some(&focus), epoch).unwrap();

        let event = AdvisorEvent {
            epoch,
            session_id: id.clone(),
            placeholder_id: start.placeholder_id,
            outcome: Ok(AdvisorReply {
                response: "the answer".into(),
                follow_up_questions: vec!["and this?".into()],
            }),
        };
        assert!(event.apply(&mut store, epoch));

        let session = store.get(&id).unwrap();
        let msg = session
            .messages()
            .iter()
            .find(|m| m.id == start.placeholder_id)
            .unwrap();
        assert_eq!(msg.text, "the answer");
        assert_eq!(msg.follow_up_questions, vec!["and this?".to_string()]);
    }

    #[test]
    fn test_failure_substitutes_error_string_session_untouched() {
        let (mut store, id) = store_with_session();
        let focus = policy("p");
        let epoch = DispatchEpoch::default();
        let start = begin_exchange(&mut store, &id, "q", Some(&focus), epoch).unwrap();
        let title_before = store.get(&id).unwrap().title().to_string();
        let count_before = store.get(&id).unwrap().messages().len();

        let event = AdvisorEvent {
            epoch,
            session_id: id.clone(),
            placeholder_id: start.placeholder_id,
            outcome: Err(GatewayError::HttpStatus { status: 500 }),
        };
        assert!(event.apply(&mut store, epoch));

        let session = store.get(&id).unwrap();
        assert_eq!(session.title(), title_before);
        assert_eq!(session.messages().len(), count_before);
        assert_eq!(
            session.messages().last().unwrap().text,
            ADVISOR_ERROR_RESPONSE
        );
    }

    #[test]
    fn test_stale_epoch_reply_dropped() {
        let (mut store, id) = store_with_session();
        let focus = policy("p");
        let mut epoch = DispatchEpoch::default();
        let start = begin_exchange(&mut store, &id, "q", Some(&focus), epoch).unwrap();

        let event = AdvisorEvent {
            epoch,
            session_id: id.clone(),
            placeholder_id: start.placeholder_id,
            outcome: Ok(AdvisorReply {
                response: "too late".into(),
                follow_up_questions: vec![],
            }),
        };
        epoch.bump(); // home navigation happened meanwhile
        assert!(!event.apply(&mut store, epoch));
        assert_eq!(
            store.get(&id).unwrap().messages().last().unwrap().text,
            PLACEHOLDER_TEXT
        );
    }

    #[tokio::test]
    async fn test_advisor_task_round_trip() {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
        });
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(advisor_task(gateway.clone(), req_rx, event_tx));

        req_tx
            .send(AdvisorRequest {
                epoch: DispatchEpoch::default(),
                session_id: "chat-1".into(),
                placeholder_id: 2,
                question: AdvisorQuestion {
                    policy: policy("p"),
                    question: "q".into(),
                    history: vec![],
                },
            })
            .unwrap();
        drop(req_tx);

        let event = event_rx.recv().await.unwrap();
        assert_eq!(event.outcome.unwrap().response, "answer");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        handle.await.unwrap();
    }
}
