//! Console output formatter for one-shot commands

use colored::Colorize;
use poliscope_application::AdvisorReply;
use poliscope_domain::{FeatureCategory, Policy};

/// Formats catalog listings and advisor answers for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a policy listing, one block per policy.
    pub fn format_listing(policies: &[Policy], from_fallback: bool) -> String {
        let mut output = String::new();

        if from_fallback {
            output.push_str(&format!(
                "{}\n\n",
                "Failed to connect to backend. Using sample data.".yellow()
            ));
        }

        for policy in policies {
            output.push_str(&format!(
                "{}  {}\n",
                policy.name.cyan().bold(),
                format!("[{}]", policy.policy_type).dimmed()
            ));
            output.push_str(&format!(
                "  {}  {} ★ ({} reviews)\n",
                policy.company,
                policy.rating,
                policy.reviews_count
            ));
            output.push_str(&format!("  {}\n", policy.short_description));
            output.push_str(&format!("  {} {}\n", "Price:".bold(), policy.price_range));
            output.push_str(&format!("  {} {}\n\n", "Id:".bold(), policy.id.dimmed()));
        }

        output.push_str(&format!("{} policies\n", policies.len()));
        output
    }

    /// Format a single policy in full, feature lists included.
    pub fn format_policy(policy: &Policy) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", policy.name.cyan().bold()));
        output.push_str(&format!("{}\n\n", policy.company));
        output.push_str(&format!("{}\n", policy.short_description));
        output.push_str(&format!("{} {}\n", "Price:".bold(), policy.price_range));
        output.push_str(&format!(
            "{} {} ★ ({} reviews)\n",
            "Rating:".bold(),
            policy.rating,
            policy.reviews_count
        ));

        for category in FeatureCategory::all() {
            let features = policy.features(category);
            if features.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{}\n", category.label().yellow().bold()));
            for feature in features {
                output.push_str(&format!("  - {}\n", feature));
            }
        }
        output
    }

    /// Format an advisor answer with its follow-up suggestions.
    pub fn format_answer(question: &str, reply: &AdvisorReply) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n\n", "Q:".cyan().bold(), question));
        output.push_str(&format!("{}\n", reply.response));

        if !reply.follow_up_questions.is_empty() {
            output.push_str(&format!("\n{}\n", "You could also ask:".dimmed()));
            for follow_up in &reply.follow_up_questions {
                output.push_str(&format!("  {} {}\n", "-".dimmed(), follow_up));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poliscope_domain::PolicyType;

    fn sample() -> Policy {
        Policy {
            id: "health-cocure".into(),
            policy_type: PolicyType::Health,
            company: "Cocure Insurance".into(),
            name: "Cocure Health Plan".into(),
            short_description: "Comprehensive health coverage.".into(),
            price_range: "5,000 - 20,000 / year".into(),
            must_have: vec!["Room Rent.".into()],
            good_to_have: vec![],
            add_ons: vec![],
            rating: 4.5,
            reviews_count: 1200,
            product_uin: None,
        }
    }

    #[test]
    fn test_listing_includes_fallback_banner() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_listing(&[sample()], true);
        assert!(out.contains("Failed to connect to backend. Using sample data."));
        assert!(out.contains("Cocure Health Plan"));
        assert!(out.contains("1 policies"));
    }

    #[test]
    fn test_policy_skips_empty_categories() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_policy(&sample());
        assert!(out.contains("Must Have"));
        assert!(!out.contains("Good To Have"));
    }
}
