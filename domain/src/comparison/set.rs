//! Comparison set — the user-selected policies shown side by side
//!
//! Holds at most [`MAX_COMPARE`] policies, unique by id, in insertion
//! order (which becomes column order in the comparison table). Selecting
//! an already-present policy toggles it out instead of erroring.

use crate::policy::entities::Policy;

/// Upper bound on policies compared at once.
pub const MAX_COMPARE: usize = 5;

/// User-visible feedback when the cap would be exceeded.
pub const CAP_FEEDBACK: &str =
    "You can compare a maximum of 5 policies. Please deselect one to add another.";

/// Result of a toggle, carrying the feedback line the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Added,
    Removed,
    /// The set was already full; nothing changed.
    Rejected,
}

/// Ordered, id-unique selection of policies for comparison.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    policies: Vec<Policy>,
    feedback: String,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.policies.len() >= MAX_COMPARE
    }

    pub fn contains(&self, policy_id: &str) -> bool {
        self.policies.iter().any(|p| p.id == policy_id)
    }

    /// First selected policy — the one in focus for advisor questions.
    pub fn first(&self) -> Option<&Policy> {
        self.policies.first()
    }

    /// Current selection feedback line ("" when nothing is selected).
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Toggle a policy in or out of the set.
    ///
    /// Adding past the cap leaves the set unchanged and surfaces
    /// [`CAP_FEEDBACK`]; toggling an existing id removes it.
    pub fn toggle(&mut self, policy: &Policy) -> ComparisonOutcome {
        if let Some(pos) = self.policies.iter().position(|p| p.id == policy.id) {
            self.policies.remove(pos);
            self.feedback = if self.policies.is_empty() {
                String::new()
            } else {
                selection_feedback(self.policies.len())
            };
            return ComparisonOutcome::Removed;
        }
        if self.is_full() {
            self.feedback = CAP_FEEDBACK.to_string();
            return ComparisonOutcome::Rejected;
        }
        self.policies.push(policy.clone());
        self.feedback = selection_feedback(self.policies.len());
        ComparisonOutcome::Added
    }

    pub fn clear(&mut self) {
        self.policies.clear();
        self.feedback.clear();
    }
}

fn selection_feedback(count: usize) -> String {
    format!("{} policy(s) selected.", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::entities::PolicyType;

    fn policy(id: &str) -> Policy {
        Policy {
            id: id.into(),
            policy_type: PolicyType::Health,
            company: "Co".into(),
            name: format!("{} Plan", id),
            short_description: String::new(),
            price_range: "1,000 - 2,000 / year".into(),
            must_have: vec![],
            good_to_have: vec![],
            add_ons: vec![],
            rating: 4.0,
            reviews_count: 10,
            product_uin: None,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = ComparisonSet::new();
        assert_eq!(set.toggle(&policy("a")), ComparisonOutcome::Added);
        assert_eq!(set.len(), 1);
        assert_eq!(set.feedback(), "1 policy(s) selected.");

        assert_eq!(set.toggle(&policy("a")), ComparisonOutcome::Removed);
        assert!(set.is_empty());
        assert_eq!(set.feedback(), "");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = ComparisonSet::new();
        for id in ["c", "a", "b"] {
            set.toggle(&policy(id));
        }
        let ids: Vec<_> = set.policies().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sixth_add_rejected_with_exact_feedback() {
        let mut set = ComparisonSet::new();
        for id in ["a", "b", "c", "d", "e"] {
            assert_eq!(set.toggle(&policy(id)), ComparisonOutcome::Added);
        }
        let before: Vec<_> = set.policies().iter().map(|p| p.id.clone()).collect();

        assert_eq!(set.toggle(&policy("f")), ComparisonOutcome::Rejected);
        let after: Vec<_> = set.policies().iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(
            set.feedback(),
            "You can compare a maximum of 5 policies. Please deselect one to add another."
        );
    }

    #[test]
    fn test_toggle_out_after_rejection_allows_new_add() {
        let mut set = ComparisonSet::new();
        for id in ["a", "b", "c", "d", "e"] {
            set.toggle(&policy(id));
        }
        set.toggle(&policy("f"));
        assert_eq!(set.toggle(&policy("a")), ComparisonOutcome::Removed);
        assert_eq!(set.toggle(&policy("f")), ComparisonOutcome::Added);
        assert_eq!(set.len(), 5);
    }
}
