//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Only the main
//! select! loop mutates it; background tasks report through events that
//! are applied here.

use super::carousel::QuestionCarousel;
use super::mode::InputMode;
use super::nav::{back_target, ChatEntry, NavTarget, Screen};
use poliscope_application::{
    begin_exchange, AdvisorEvent, AdvisorRequest, DispatchEpoch, SessionStore,
};
use poliscope_domain::{
    filter_by_type, sort_policies, suggested_questions, ComparisonOutcome, GreetingContext,
    Policy, PolicyType, SortOption,
};
use std::time::{Duration, Instant};

/// Budget the home screen starts from and resets to
pub const DEFAULT_BUDGET: u32 = 5000;

/// Banner shown while the catalog is the bundled sample data
pub const FALLBACK_BANNER: &str = "Failed to connect to backend. Using sample data.";

/// Comparison-count pricing: (price, plan name)
pub const PAYMENT_PRICING: [(u32, &str); 5] = [
    (0, "Free"),
    (90, "Standard Plan"),
    (150, "Premium Plan"),
    (200, "Advanced Plan"),
    (250, "Complete Plan"),
];

/// Bot message appended after a successful mock payment
pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful! You now have access to premium \
policy comparison features. How would you like to proceed?";

/// Form buffer for the sign-up / login / upload screens
#[derive(Debug, Default)]
pub struct FormState {
    pub values: Vec<String>,
    pub active: usize,
}

impl FormState {
    pub fn reset(&mut self, field_count: usize) {
        self.values = vec![String::new(); field_count];
        self.active = 0;
    }

    pub fn next_field(&mut self) {
        if !self.values.is_empty() {
            self.active = (self.active + 1) % self.values.len();
        }
    }

    pub fn active_value_mut(&mut self) -> Option<&mut String> {
        self.values.get_mut(self.active)
    }

    pub fn all_filled(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|v| !v.trim().is_empty())
    }
}

/// Central TUI state, owned by the main loop
pub struct TuiState {
    // -- Navigation --
    pub screen: Screen,
    pub listing_type: Option<PolicyType>,
    pub selected_policy_id: Option<String>,
    pub direct_chat_access: bool,

    // -- Catalog --
    pub policies: Vec<Policy>,
    pub from_fallback: bool,
    pub catalog_loading: bool,

    // -- Home selections --
    pub selected_type: Option<PolicyType>,
    pub budget: u32,

    // -- Listing --
    pub sort: SortOption,
    pub list_cursor: usize,
    pub comparison: poliscope_domain::ComparisonSet,

    // -- Chat --
    pub sessions: SessionStore,
    pub epoch: DispatchEpoch,
    pub carousel: QuestionCarousel,
    pub show_history_sidebar: bool,
    pub history_cursor: usize,

    // -- Documents, auth, payment --
    pub uploaded_document: Option<String>,
    pub logged_in_user: Option<String>,
    pub subscription: &'static str,
    pub form: FormState,

    // -- Input --
    pub mode: InputMode,
    pub input: String,
    pub input_cursor: usize,

    // -- Overlay --
    pub scroll: u16,
    pub show_help: bool,
    pub flash: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(policies: Vec<Policy>, from_fallback: bool, rotate_every_ticks: u32) -> Self {
        let mut sessions = SessionStore::new();
        sessions.open_session(&GreetingContext {
            budget: DEFAULT_BUDGET,
            ..Default::default()
        });

        let mut state = Self {
            screen: Screen::Home,
            listing_type: None,
            selected_policy_id: None,
            direct_chat_access: false,
            policies,
            from_fallback,
            catalog_loading: true,
            selected_type: None,
            budget: DEFAULT_BUDGET,
            sort: SortOption::default(),
            list_cursor: 0,
            comparison: poliscope_domain::ComparisonSet::new(),
            sessions,
            epoch: DispatchEpoch::default(),
            carousel: QuestionCarousel::new(rotate_every_ticks),
            show_history_sidebar: false,
            history_cursor: 0,
            uploaded_document: None,
            logged_in_user: None,
            subscription: "Free",
            form: FormState::default(),
            mode: InputMode::default(),
            input: String::new(),
            input_cursor: 0,
            scroll: 0,
            show_help: false,
            flash: None,
            should_quit: false,
        };
        state.refresh_suggestions();
        state
    }

    // -- Catalog --

    /// Replace the catalog with freshly loaded policies.
    pub fn apply_catalog(&mut self, policies: Vec<Policy>, from_fallback: bool) {
        self.catalog_loading = false;
        if policies.is_empty() {
            return;
        }
        self.from_fallback = from_fallback;
        self.policies = policies;
        self.list_cursor = 0;
        // Selections may point at ids the backend no longer serves
        let known: Vec<String> = self
            .comparison
            .policies()
            .iter()
            .filter(|p| self.policies.iter().any(|q| q.id == p.id))
            .map(|p| p.id.clone())
            .collect();
        if known.len() < self.comparison.len() {
            let ids = known;
            self.comparison.clear();
            for id in ids {
                if let Some(policy) = self.policy(&id).cloned() {
                    self.comparison.toggle(&policy);
                }
            }
        }
    }

    pub fn policy(&self, id: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }

    /// Policies for the listing screen: filtered by type, sorted.
    pub fn visible_policies(&self) -> Vec<Policy> {
        let mut policies = match self.listing_type {
            Some(policy_type) => filter_by_type(&self.policies, policy_type),
            None => self.policies.clone(),
        };
        sort_policies(&mut policies, self.sort);
        policies
    }

    pub fn selected_policy(&self) -> Option<&Policy> {
        self.selected_policy_id
            .as_deref()
            .and_then(|id| self.policy(id))
    }

    /// The policy advisor questions are about: the explicitly selected
    /// one, or the first of the comparison set.
    ///
    /// The explicit selection is written on every path that narrows the
    /// conversation to one policy (Details, WithPolicy, and
    /// WithComparison, which seeds it from the comparison head), so it
    /// wins over a comparison set left behind by an earlier listing.
    pub fn focus_policy(&self) -> Option<&Policy> {
        self.selected_policy().or_else(|| self.comparison.first())
    }

    // -- Navigation --

    /// Apply a navigation request with its side effects.
    pub fn navigate(&mut self, target: NavTarget) {
        let destination = target.screen();

        match target {
            NavTarget::Home => self.reset_to_home(),
            NavTarget::SignUp => self.form.reset(3),
            NavTarget::Login => self.form.reset(2),
            NavTarget::Listing(policy_type) => {
                self.listing_type = Some(policy_type);
                self.selected_type = Some(policy_type);
            }
            NavTarget::Details { policy_id } => {
                self.selected_policy_id = Some(policy_id);
            }
            NavTarget::Chat(entry) => self.enter_chat(entry),
            NavTarget::UploadDocument => self.form.reset(1),
            NavTarget::Payment => {}
        }

        // Scroll resets on every transition except into the listing
        if destination != Screen::PolicyListing {
            self.scroll = 0;
        }
        self.mode = InputMode::Normal;
        self.show_help = false;
        self.screen = destination;
    }

    /// Esc: one step back following the screen's back rule.
    pub fn go_back(&mut self) {
        if let Some(target) = back_target(self.screen, self.listing_type) {
            self.navigate(target);
        }
    }

    fn reset_to_home(&mut self) {
        self.selected_type = None;
        self.budget = DEFAULT_BUDGET;
        self.listing_type = None;
        self.selected_policy_id = None;
        self.comparison.clear();
        self.uploaded_document = None;
        self.direct_chat_access = false;
        self.list_cursor = 0;
        self.sort = SortOption::default();
        // In-flight advisor replies for the old context must not land
        self.epoch.bump();
        self.refresh_suggestions();
    }

    fn enter_chat(&mut self, entry: ChatEntry) {
        match entry {
            ChatEntry::Direct => {
                self.direct_chat_access = true;
            }
            ChatEntry::FromHome => {
                self.direct_chat_access = false;
                self.sessions.open_session(&GreetingContext {
                    policy_type: self.selected_type,
                    budget: self.budget,
                    ..Default::default()
                });
            }
            ChatEntry::WithPolicy(policy_id) => {
                self.direct_chat_access = false;
                self.selected_policy_id = Some(policy_id.clone());
                let focus: Vec<Policy> = self.policy(&policy_id).cloned().into_iter().collect();
                self.sessions.open_session(&GreetingContext {
                    policies: &focus,
                    uploaded_document: self.uploaded_document.as_deref(),
                    policy_type: self.selected_type,
                    budget: self.budget,
                });
            }
            ChatEntry::WithComparison(ids) => {
                self.direct_chat_access = false;
                self.selected_policy_id = ids.first().cloned();
                let selected: Vec<Policy> = ids
                    .iter()
                    .filter_map(|id| self.policy(id).cloned())
                    .collect();
                // The greeting names at most two policies
                self.sessions.open_session(&GreetingContext {
                    policies: &selected[..selected.len().min(2)],
                    uploaded_document: self.uploaded_document.as_deref(),
                    policy_type: self.selected_type,
                    budget: self.budget,
                });
            }
        }
        self.refresh_suggestions();
    }

    // -- Chat --

    pub fn refresh_suggestions(&mut self) {
        let questions = suggested_questions(self.comparison.policies(), self.selected_type);
        self.carousel.set_questions(questions);
    }

    /// Submit the chat input. Returns the request to hand to the
    /// advisor task, when one is needed.
    pub fn submit_question(&mut self, text: &str) -> Option<AdvisorRequest> {
        let session_id = self.sessions.current_id()?.to_string();
        let focus = self.focus_policy().cloned();
        let start = begin_exchange(
            &mut self.sessions,
            &session_id,
            text,
            focus.as_ref(),
            self.epoch,
        )?;
        start.request
    }

    /// Apply a completed advisor exchange. Stale replies are dropped.
    pub fn apply_advisor_event(&mut self, event: AdvisorEvent) -> bool {
        event.apply(&mut self.sessions, self.epoch)
    }

    pub fn open_new_session(&mut self) {
        let focus: Vec<Policy> = self.focus_policy().cloned().into_iter().collect();
        self.sessions.open_session(&GreetingContext {
            policies: &focus,
            uploaded_document: self.uploaded_document.as_deref(),
            policy_type: self.selected_type,
            budget: self.budget,
        });
        self.history_cursor = self.sessions.len().saturating_sub(1);
    }

    // -- Comparison --

    /// Toggle a policy in the comparison set and surface the feedback.
    pub fn toggle_compare(&mut self, policy_id: &str) {
        let Some(policy) = self.policy(policy_id).cloned() else {
            return;
        };
        let outcome = self.comparison.toggle(&policy);
        let feedback = self.comparison.feedback().to_string();
        if !feedback.is_empty() {
            self.set_flash(feedback);
        }
        if outcome != ComparisonOutcome::Rejected {
            self.refresh_suggestions();
        }
    }

    // -- Payment --

    /// Plan for the current comparison size (1 policy is free).
    pub fn payment_plan(&self) -> (u32, &'static str) {
        let count = self.comparison.len().clamp(1, PAYMENT_PRICING.len());
        PAYMENT_PRICING[count - 1]
    }

    /// Complete the mock payment: upgrade the subscription and append
    /// the confirmation to the current chat.
    pub fn confirm_payment(&mut self) {
        let (_, plan) = self.payment_plan();
        self.subscription = plan;
        if let Some(session) = self.sessions.current_mut() {
            session.push(poliscope_domain::Sender::Bot, PAYMENT_SUCCESS_MESSAGE);
        }
        self.navigate(NavTarget::Chat(ChatEntry::Direct));
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.input_cursor > 0 {
            let prev_len = self.input[..self.input_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input.remove(self.input_cursor - prev_len);
            self.input_cursor -= prev_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            let prev_len = self.input[..self.input_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input_cursor -= prev_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            let next_len = self.input[self.input_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input_cursor += next_len;
        }
    }

    pub fn take_input(&mut self) -> String {
        self.input_cursor = 0;
        std::mem::take(&mut self.input)
    }

    // -- Flash --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, after: Duration) {
        if let Some((_, at)) = &self.flash {
            if at.elapsed() >= after {
                self.flash = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poliscope_domain::{PolicyType, CAP_FEEDBACK};

    fn policy(id: &str, policy_type: PolicyType) -> Policy {
        Policy {
            id: id.into(),
            policy_type,
            company: "Co".into(),
            name: format!("{} Plan", id),
            short_description: String::new(),
            price_range: "1,000 - 2,000 / year".into(),
            must_have: vec![],
            good_to_have: vec![],
            add_ons: vec![],
            rating: 4.0,
            reviews_count: 100,
            product_uin: None,
        }
    }

    fn state() -> TuiState {
        let policies = vec![
            policy("h1", PolicyType::Health),
            policy("h2", PolicyType::Health),
            policy("h3", PolicyType::Health),
            policy("h4", PolicyType::Health),
            policy("h5", PolicyType::Health),
            policy("h6", PolicyType::Health),
            policy("t1", PolicyType::Term),
        ];
        TuiState::new(policies, true, 12)
    }

    #[test]
    fn test_home_reset_clears_selections_and_bumps_epoch() {
        let mut s = state();
        s.navigate(NavTarget::Listing(PolicyType::Health));
        s.toggle_compare("h1");
        s.budget = 12000;
        s.uploaded_document = Some("mine.pdf".into());
        let epoch_before = s.epoch;

        s.navigate(NavTarget::Home);
        assert_eq!(s.screen, Screen::Home);
        assert!(s.comparison.is_empty());
        assert_eq!(s.budget, DEFAULT_BUDGET);
        assert_eq!(s.selected_type, None);
        assert_eq!(s.uploaded_document, None);
        assert_ne!(s.epoch, epoch_before);
    }

    #[test]
    fn test_listing_keeps_cursor_other_screens_reset_scroll() {
        let mut s = state();
        s.navigate(NavTarget::Listing(PolicyType::Health));
        s.list_cursor = 3;
        s.scroll = 7;
        s.navigate(NavTarget::Details {
            policy_id: "h1".into(),
        });
        assert_eq!(s.scroll, 0);
        // Back to the same type listing, cursor preserved
        s.go_back();
        assert_eq!(s.screen, Screen::PolicyListing);
        assert_eq!(s.listing_type, Some(PolicyType::Health));
        assert_eq!(s.list_cursor, 3);
    }

    #[test]
    fn test_direct_chat_access_flag() {
        let mut s = state();
        s.navigate(NavTarget::Chat(ChatEntry::Direct));
        assert!(s.direct_chat_access);
        s.navigate(NavTarget::Home);
        assert!(!s.direct_chat_access);
    }

    #[test]
    fn test_focus_prefers_selected_policy_over_leftover_comparison() {
        let mut s = state();
        s.navigate(NavTarget::Listing(PolicyType::Health));
        s.toggle_compare("h1");
        // Asking about a different policy narrows the focus to it, even
        // though h1 is still in the comparison set
        s.navigate(NavTarget::Details {
            policy_id: "h2".into(),
        });
        assert_eq!(s.focus_policy().unwrap().id, "h2");
        assert!(s.comparison.contains("h1"));
    }

    #[test]
    fn test_focus_follows_comparison_head_without_selection() {
        let mut s = state();
        s.navigate(NavTarget::Listing(PolicyType::Health));
        s.toggle_compare("h2");
        s.toggle_compare("h3");
        assert_eq!(s.focus_policy().unwrap().id, "h2");
        // A comparison chat seeds the selection from the head
        s.navigate(NavTarget::Chat(ChatEntry::WithComparison(vec![
            "h2".into(),
            "h3".into(),
        ])));
        assert_eq!(s.focus_policy().unwrap().id, "h2");
    }

    #[test]
    fn test_chat_with_policy_opens_greeting_session() {
        let mut s = state();
        let before = s.sessions.len();
        s.navigate(NavTarget::Chat(ChatEntry::WithPolicy("h1".into())));
        assert_eq!(s.sessions.len(), before + 1);
        let greeting = &s.sessions.current().unwrap().messages()[0];
        assert!(greeting.text.contains("h1 Plan"));
    }

    #[test]
    fn test_compare_cap_feedback() {
        let mut s = state();
        for id in ["h1", "h2", "h3", "h4", "h5"] {
            s.toggle_compare(id);
        }
        assert_eq!(s.comparison.len(), 5);
        s.toggle_compare("h6");
        assert_eq!(s.comparison.len(), 5);
        assert_eq!(s.flash.as_ref().unwrap().0, CAP_FEEDBACK);
    }

    #[test]
    fn test_visible_policies_filtered_by_listing_type() {
        let mut s = state();
        s.navigate(NavTarget::Listing(PolicyType::Term));
        let visible = s.visible_policies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "t1");
    }

    #[test]
    fn test_payment_plan_follows_comparison_size() {
        let mut s = state();
        assert_eq!(s.payment_plan(), (0, "Free"));
        s.toggle_compare("h1");
        s.toggle_compare("h2");
        assert_eq!(s.payment_plan(), (90, "Standard Plan"));
        s.toggle_compare("h3");
        assert_eq!(s.payment_plan(), (150, "Premium Plan"));
    }

    #[test]
    fn test_confirm_payment_appends_chat_message_and_returns_to_chat() {
        let mut s = state();
        s.toggle_compare("h1");
        s.toggle_compare("h2");
        s.navigate(NavTarget::Payment);
        s.confirm_payment();
        assert_eq!(s.screen, Screen::PolicyAdvisorChat);
        assert_eq!(s.subscription, "Standard Plan");
        let last = s.sessions.current().unwrap().messages().last().unwrap();
        assert_eq!(last.text, PAYMENT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_submit_question_without_focus_needs_no_request() {
        let mut s = state();
        s.navigate(NavTarget::Chat(ChatEntry::Direct));
        assert!(s.submit_question("hello").is_none());
        let last = s.sessions.current().unwrap().messages().last().unwrap();
        assert_eq!(last.text, poliscope_domain::NO_POLICY_RESPONSE);
    }

    #[test]
    fn test_submit_question_with_focus_produces_request() {
        let mut s = state();
        s.toggle_compare("h1");
        s.navigate(NavTarget::Chat(ChatEntry::WithComparison(vec!["h1".into()])));
        let request = s.submit_question("what about copayment?").unwrap();
        assert_eq!(request.question.policy.id, "h1");
        assert_eq!(request.epoch, s.epoch);
    }

    #[test]
    fn test_stale_reply_dropped_after_home_reset() {
        use poliscope_application::AdvisorReply;

        let mut s = state();
        s.toggle_compare("h1");
        s.navigate(NavTarget::Chat(ChatEntry::WithComparison(vec!["h1".into()])));
        let request = s.submit_question("q").unwrap();
        let session_id = request.session_id.clone();
        let placeholder_id = request.placeholder_id;

        s.navigate(NavTarget::Home);
        let applied = s.apply_advisor_event(AdvisorEvent {
            epoch: request.epoch,
            session_id: session_id.clone(),
            placeholder_id,
            outcome: Ok(AdvisorReply {
                response: "late".into(),
                follow_up_questions: vec![],
            }),
        });
        assert!(!applied);
        let session = s.sessions.get(&session_id).unwrap();
        assert_eq!(
            session.messages().last().unwrap().text,
            poliscope_domain::PLACEHOLDER_TEXT
        );
    }

    #[test]
    fn test_apply_catalog_keeps_fallback_on_empty_load() {
        let mut s = state();
        let before = s.policies.len();
        s.apply_catalog(Vec::new(), false);
        assert_eq!(s.policies.len(), before);
        assert!(s.from_fallback);
        assert!(!s.catalog_loading);
    }

    #[test]
    fn test_apply_catalog_drops_unknown_comparison_ids() {
        let mut s = state();
        s.toggle_compare("h1");
        s.toggle_compare("h2");
        s.apply_catalog(vec![policy("h1", PolicyType::Health)], false);
        assert_eq!(s.comparison.len(), 1);
        assert!(s.comparison.contains("h1"));
    }
}
