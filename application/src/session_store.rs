//! Chat session store
//!
//! Owns every [`ChatSession`] created during a run, keyed by id, plus the
//! id of the active session. Sessions are created on demand and never
//! deleted; only the single owner (the TUI state, or a one-shot use case)
//! mutates it.

use poliscope_domain::{initial_greeting, ChatSession, GreetingContext};
use std::collections::HashMap;

/// In-memory session map with an active-session cursor.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, ChatSession>,
    /// Kept alongside the map so session lists render in creation order.
    order: Vec<String>,
    current: Option<String>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session opened with the context-appropriate greeting and
    /// make it current. Returns the new session id.
    pub fn open_session(&mut self, ctx: &GreetingContext<'_>) -> String {
        self.open_with(Some(initial_greeting(ctx)))
    }

    /// Create a session with no greeting (used when a policy is handed to
    /// the chat directly and the first message comes from the user).
    pub fn open_blank_session(&mut self) -> String {
        self.open_with(None)
    }

    fn open_with(&mut self, greeting: Option<String>) -> String {
        self.next_id += 1;
        let id = format!("chat-{}", self.next_id);
        let session = match greeting {
            Some(text) => ChatSession::with_greeting(&id, text),
            None => ChatSession::new(&id),
        };
        self.sessions.insert(id.clone(), session);
        self.order.push(id.clone());
        self.current = Some(id.clone());
        id
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set_current(&mut self, id: &str) -> bool {
        if self.sessions.contains_key(id) {
            self.current = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&ChatSession> {
        self.current.as_ref().and_then(|id| self.sessions.get(id))
    }

    pub fn current_mut(&mut self) -> Option<&mut ChatSession> {
        let id = self.current.clone()?;
        self.sessions.get_mut(&id)
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ChatSession> {
        self.sessions.get_mut(id)
    }

    /// Session ids in creation order (for the history sidebar).
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_session_becomes_current() {
        let mut store = SessionStore::new();
        let ctx = GreetingContext {
            budget: 5000,
            ..Default::default()
        };
        let id = store.open_session(&ctx);
        assert_eq!(store.current_id(), Some(id.as_str()));
        assert_eq!(store.current().unwrap().messages().len(), 1);
    }

    #[test]
    fn test_blank_session_has_no_greeting() {
        let mut store = SessionStore::new();
        store.open_blank_session();
        assert!(store.current().unwrap().messages().is_empty());
    }

    #[test]
    fn test_sessions_never_deleted_and_order_kept() {
        let mut store = SessionStore::new();
        let ctx = GreetingContext::default();
        let a = store.open_session(&ctx);
        let b = store.open_session(&ctx);
        assert_eq!(store.len(), 2);
        assert_eq!(store.ids(), &[a.clone(), b.clone()]);

        assert!(store.set_current(&a));
        assert_eq!(store.current_id(), Some(a.as_str()));
        assert!(store.get(&b).is_some());
    }

    #[test]
    fn test_set_current_unknown_id_rejected() {
        let mut store = SessionStore::new();
        store.open_session(&GreetingContext::default());
        let before = store.current_id().unwrap().to_string();
        assert!(!store.set_current("chat-999"));
        assert_eq!(store.current_id(), Some(before.as_str()));
    }
}
