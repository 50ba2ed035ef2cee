//! Initial advisor greeting
//!
//! The greeting adapts to how the chat was reached: comparing policies,
//! an uploaded document, a selected type and budget, or nothing at all.

use crate::policy::entities::{Policy, PolicyType};

/// Context available when a chat session opens.
#[derive(Debug, Default)]
pub struct GreetingContext<'a> {
    pub policies: &'a [Policy],
    pub uploaded_document: Option<&'a str>,
    pub policy_type: Option<PolicyType>,
    pub budget: u32,
}

/// Build the opening bot message for a new session.
pub fn initial_greeting(ctx: &GreetingContext<'_>) -> String {
    match (ctx.policies, ctx.uploaded_document) {
        ([a, b], Some(doc)) => format!(
            "Hello! I see you're comparing \"{}\", \"{}\", and your uploaded document \"{}\". \
             What would you like to know about these policies?",
            a.name, b.name, doc
        ),
        ([a, b], None) => format!(
            "Hello! I see you're comparing \"{}\" and \"{}\". \
             What would you like to know about these two policies?",
            a.name, b.name
        ),
        ([p], Some(doc)) => format!(
            "Hello! I see you're comparing \"{}\" and your uploaded document \"{}\". \
             What would you like to know about these two?",
            p.name, doc
        ),
        ([p], None) => format!(
            "Hello! I'm your Policy Advisor. You're viewing \"{}\". \
             What would you like to know about this policy?",
            p.name
        ),
        _ => match ctx.policy_type {
            Some(pt) => format!(
                "Hello! I'm your Policy Advisor. I can help you with {} insurance decisions \
                 with a budget around {}. What would you like to know about {} policies?",
                pt.as_str().to_lowercase(),
                group_thousands(ctx.budget),
                pt
            ),
            None => "Hello! I'm your Policy Advisor. I can help you with insurance decisions. \
                     What types of policies are you interested in?"
                .to_string(),
        },
    }
}

fn group_thousands(n: u32) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(name: &str) -> Policy {
        Policy {
            id: name.to_lowercase(),
            policy_type: PolicyType::Health,
            company: "Co".into(),
            name: name.into(),
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

    #[test]
    fn test_generic_greeting() {
        let ctx = GreetingContext {
            budget: 5000,
            ..Default::default()
        };
        assert_eq!(
            initial_greeting(&ctx),
            "Hello! I'm your Policy Advisor. I can help you with insurance decisions. \
             What types of policies are you interested in?"
        );
    }

    #[test]
    fn test_type_and_budget_greeting() {
        let ctx = GreetingContext {
            policy_type: Some(PolicyType::Health),
            budget: 5000,
            ..Default::default()
        };
        let text = initial_greeting(&ctx);
        assert!(text.contains("health insurance decisions"));
        assert!(text.contains("budget around 5,000"));
        assert!(text.contains("Health policies"));
    }

    #[test]
    fn test_single_policy_greeting() {
        let policies = [policy("Cocure Health Plan")];
        let ctx = GreetingContext {
            policies: &policies,
            budget: 5000,
            ..Default::default()
        };
        assert!(initial_greeting(&ctx).contains("You're viewing \"Cocure Health Plan\""));
    }

    #[test]
    fn test_two_policies_greeting() {
        let policies = [policy("Plan A"), policy("Plan B")];
        let ctx = GreetingContext {
            policies: &policies,
            budget: 5000,
            ..Default::default()
        };
        let text = initial_greeting(&ctx);
        assert!(text.contains("comparing \"Plan A\" and \"Plan B\""));
    }

    #[test]
    fn test_policy_plus_document_greeting() {
        let policies = [policy("Plan A")];
        let ctx = GreetingContext {
            policies: &policies,
            uploaded_document: Some("my-policy.pdf"),
            budget: 5000,
            ..Default::default()
        };
        let text = initial_greeting(&ctx);
        assert!(text.contains("\"Plan A\" and your uploaded document \"my-policy.pdf\""));
    }
}
