//! Backend policy normalization
//!
//! Structured feature fields become `"Label: Value"` entries grouped into
//! the three feature categories. When no structured field is present the
//! ready-made lists (`benefits` / `exclusions` / `eligibility`) are used
//! as-is. Policies with a type outside the known three are dropped.

use crate::api::types::BackendPolicy;
use poliscope_domain::{Policy, PolicyType};
use tracing::warn;

/// Label for each structured must-have field, in display order.
const MUST_HAVE_FIELDS: &[(&str, fn(&BackendPolicy) -> Option<&String>)] = &[
    ("Claim Settlement Ratio", |p| p.claim_settlement_ratio.as_ref()),
    ("Hospital Network", |p| p.hospital_network.as_ref()),
    ("Room Rent", |p| p.room_rent.as_ref()),
    ("Copayment", |p| p.copayment.as_ref()),
    ("Restoration Benefit", |p| p.restoration_benefit.as_ref()),
    ("Pre & Post Hospitalization", |p| {
        p.pre_post_hospitalization_coverage.as_ref()
    }),
];

const GOOD_TO_HAVE_FIELDS: &[(&str, fn(&BackendPolicy) -> Option<&String>)] = &[
    ("Waiting Period", |p| p.waiting_period.as_ref()),
    ("No Claim Bonus", |p| p.no_claim_bonus.as_ref()),
    ("Disease Sub-limits", |p| p.disease_sub_limits.as_ref()),
    ("AYUSH Treatment", |p| p.alternate_treatment_coverage.as_ref()),
    ("Maternity Care", |p| p.maternity_care.as_ref()),
    ("Newborn Care", |p| p.newborn_care.as_ref()),
    ("Health Checkups", |p| p.health_checkups.as_ref()),
];

const ADD_ON_FIELDS: &[(&str, fn(&BackendPolicy) -> Option<&String>)] = &[
    ("Domiciliary", |p| p.domiciliary.as_ref()),
    ("OPD Coverage", |p| p.outpatient_department.as_ref()),
    ("Lifelong Renewal", |p| p.lifelong_renewal.as_ref()),
    ("Critical Illness Rider", |p| p.critical_illness_rider.as_ref()),
    ("Accident & Disability Rider", |p| {
        p.accident_disability_rider.as_ref()
    }),
];

fn labelled_entries(
    raw: &BackendPolicy,
    fields: &[(&str, fn(&BackendPolicy) -> Option<&String>)],
    ready_made: &[String],
) -> Vec<String> {
    let entries: Vec<String> = fields
        .iter()
        .filter_map(|(label, get)| get(raw).map(|value| format!("{}: {}", label, value)))
        .collect();
    if entries.is_empty() {
        ready_made.to_vec()
    } else {
        entries
    }
}

/// Convert a wire policy into the domain model.
///
/// Returns None when the policy type is not one of the known three.
pub fn normalize_policy(raw: BackendPolicy) -> Option<Policy> {
    let policy_type = match raw.policy_type.parse::<PolicyType>() {
        Ok(pt) => pt,
        Err(_) => {
            warn!(id = %raw.id, kind = %raw.policy_type, "dropping policy with unknown type");
            return None;
        }
    };

    let must_have = labelled_entries(&raw, MUST_HAVE_FIELDS, &raw.benefits);
    let good_to_have = labelled_entries(&raw, GOOD_TO_HAVE_FIELDS, &raw.exclusions);
    let add_ons = labelled_entries(&raw, ADD_ON_FIELDS, &raw.eligibility);

    Some(Policy {
        id: raw.id,
        policy_type,
        company: raw.company,
        name: raw.name,
        short_description: raw.short_description,
        price_range: raw.price_range,
        must_have,
        good_to_have,
        add_ons,
        rating: raw.rating,
        reviews_count: raw.reviews_count,
        product_uin: raw.product_uin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(policy_type: &str) -> BackendPolicy {
        BackendPolicy {
            id: "p1".into(),
            policy_type: policy_type.into(),
            company: "Co".into(),
            name: "Plan".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_fields_become_labelled_entries() {
        let mut input = raw("Health");
        input.claim_settlement_ratio = Some("98.2%".into());
        input.room_rent = Some("No cap".into());
        input.waiting_period = Some("2 years".into());
        input.domiciliary = Some("Covered".into());

        let policy = normalize_policy(input).unwrap();
        assert_eq!(
            policy.must_have,
            vec!["Claim Settlement Ratio: 98.2%", "Room Rent: No cap"]
        );
        assert_eq!(policy.good_to_have, vec!["Waiting Period: 2 years"]);
        assert_eq!(policy.add_ons, vec!["Domiciliary: Covered"]);
    }

    #[test]
    fn test_ready_made_lists_used_when_no_structured_fields() {
        let mut input = raw("Term");
        input.benefits = vec!["Death benefit paid as lump sum.".into()];
        input.exclusions = vec!["Fraudulent claims.".into()];
        input.eligibility = vec!["Age: 18-60 years.".into()];

        let policy = normalize_policy(input).unwrap();
        assert_eq!(policy.must_have, vec!["Death benefit paid as lump sum."]);
        assert_eq!(policy.good_to_have, vec!["Fraudulent claims."]);
        assert_eq!(policy.add_ons, vec!["Age: 18-60 years."]);
    }

    #[test]
    fn test_structured_fields_shadow_ready_made_lists() {
        let mut input = raw("Health");
        input.copayment = Some("None".into());
        input.benefits = vec!["ignored".into()];

        let policy = normalize_policy(input).unwrap();
        assert_eq!(policy.must_have, vec!["Copayment: None"]);
    }

    #[test]
    fn test_unknown_type_dropped() {
        assert!(normalize_policy(raw("Travel")).is_none());
        assert!(normalize_policy(raw("Health")).is_some());
    }
}
