//! Suggested quick-questions
//!
//! Static table keyed by (comparison-set size, selected policy type) — no
//! backend involvement. The single-policy variant interpolates the policy
//! name so the question reads naturally in the carousel.

use crate::policy::entities::{Policy, PolicyType};

/// Pick the quick-question list for the current context.
pub fn suggested_questions(
    comparing: &[Policy],
    policy_type: Option<PolicyType>,
) -> Vec<String> {
    match comparing {
        [] => by_type(policy_type),
        [single] => single_policy(&single.name),
        [_, _] => two_policies(),
        _ => many_policies(),
    }
}

fn single_policy(name: &str) -> Vec<String> {
    vec![
        format!("What are the key benefits of \"{}\"?", name),
        "How does this policy compare to others?".into(),
        "What exclusions should I be aware of?".into(),
        "Is this policy good for my situation?".into(),
        "What is the claim process for this policy?".into(),
        "Are there any hidden charges I should know about?".into(),
        "How does the renewal process work?".into(),
        "What are the payment options available?".into(),
        "Is there a waiting period for any benefits?".into(),
        "Can I customize this policy based on my needs?".into(),
    ]
}

fn two_policies() -> Vec<String> {
    [
        "What are the main differences between these policies?",
        "Which one offers better value for money?",
        "How do their coverage levels compare?",
        "Which policy has better customer reviews?",
        "What are the claim settlement ratios for these policies?",
        "Which policy has more network hospitals/garages?",
        "How do the renewal terms differ between these policies?",
        "Which policy offers better add-on covers?",
        "What are the tax benefits for each of these policies?",
        "Which policy would you recommend for my specific needs?",
    ]
    .map(String::from)
    .to_vec()
}

fn many_policies() -> Vec<String> {
    [
        "Which of these policies offers the best coverage?",
        "How do the premiums compare across these policies?",
        "Are there any significant exclusions I should know about?",
        "Which policy would you recommend for my situation?",
        "What are the claim processes for each of these policies?",
        "Which policy has the highest customer satisfaction rating?",
        "How do the renewal terms differ across these policies?",
        "Which policy offers the most flexibility in customization?",
        "What are the co-payment requirements for each policy?",
        "Which policy has the widest network of service providers?",
    ]
    .map(String::from)
    .to_vec()
}

fn by_type(policy_type: Option<PolicyType>) -> Vec<String> {
    let questions: [&str; 10] = match policy_type {
        Some(PolicyType::Health) => [
            "What health coverage options are available?",
            "How do I choose the right health insurance plan?",
            "What factors affect health insurance premiums?",
            "Can you explain deductibles and copays?",
            "What is the difference between individual and family floater plans?",
            "How do pre-existing conditions affect my coverage?",
            "What are the common exclusions in health insurance?",
            "How does the claim process work for health insurance?",
            "What are the tax benefits of health insurance?",
            "How do I find network hospitals near me?",
        ],
        Some(PolicyType::Term) => [
            "How much term life insurance do I need?",
            "What factors affect term life insurance premiums?",
            "What's the difference between term and whole life insurance?",
            "How do I choose the right policy term?",
            "What are the different types of term insurance plans?",
            "How do riders enhance my term insurance coverage?",
            "What is the claim settlement process for term insurance?",
            "How does my health affect my term insurance premium?",
            "What are the tax benefits of term insurance?",
            "Can I increase my coverage amount later?",
        ],
        Some(PolicyType::Motor) => [
            "What factors affect car insurance premiums?",
            "What coverage options are available?",
            "How do I choose the right deductible?",
            "What discounts are available for car insurance?",
            "What is the difference between comprehensive and third-party insurance?",
            "How does no-claim bonus work in motor insurance?",
            "What are the add-on covers available for motor insurance?",
            "How does the claim process work for motor insurance?",
            "What documents are required for motor insurance claim?",
            "How does my vehicle's age affect my insurance premium?",
        ],
        None => [
            "What types of insurance do I need?",
            "How do I choose the right insurance policy?",
            "What factors affect insurance premiums?",
            "Can you explain the terms and conditions?",
            "What is the importance of insurance in financial planning?",
            "How do I assess my insurance needs?",
            "What are the common mistakes to avoid when buying insurance?",
            "How often should I review my insurance policies?",
            "What is the role of an insurance advisor?",
            "How do I compare different insurance policies effectively?",
        ],
    };
    questions.map(String::from).to_vec()
}
