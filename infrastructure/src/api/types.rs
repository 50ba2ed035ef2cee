//! Wire types for the backend API
//!
//! The backend has served two shapes over time: an early one with
//! ready-made feature lists (`benefits` / `exclusions` / `eligibility`)
//! and the current one with structured per-feature fields
//! (`claim_settlement_ratio`, `room_rent`, ...). [`BackendPolicy`]
//! accepts both; normalization into the domain model happens in
//! [`crate::catalog::normalize`].

use serde::{Deserialize, Serialize};

/// A policy as returned by `GET /policies`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendPolicy {
    pub id: String,
    #[serde(rename = "type", default)]
    pub policy_type: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "shortDescription")]
    pub short_description: String,
    #[serde(default, alias = "priceRange")]
    pub price_range: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, alias = "reviewsCount")]
    pub reviews_count: u32,
    #[serde(default)]
    pub product_uin: Option<String>,

    // Ready-made feature lists (early backend shape)
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub eligibility: Vec<String>,

    // Structured feature fields (current backend shape)
    #[serde(default)]
    pub claim_settlement_ratio: Option<String>,
    #[serde(default)]
    pub hospital_network: Option<String>,
    #[serde(default)]
    pub room_rent: Option<String>,
    #[serde(default)]
    pub copayment: Option<String>,
    #[serde(default)]
    pub restoration_benefit: Option<String>,
    #[serde(default)]
    pub pre_post_hospitalization_coverage: Option<String>,
    #[serde(default)]
    pub waiting_period: Option<String>,
    #[serde(default)]
    pub no_claim_bonus: Option<String>,
    #[serde(default)]
    pub disease_sub_limits: Option<String>,
    #[serde(default)]
    pub alternate_treatment_coverage: Option<String>,
    #[serde(default)]
    pub maternity_care: Option<String>,
    #[serde(default)]
    pub newborn_care: Option<String>,
    #[serde(default)]
    pub health_checkups: Option<String>,
    #[serde(default)]
    pub domiciliary: Option<String>,
    #[serde(default)]
    pub outpatient_department: Option<String>,
    #[serde(default)]
    pub lifelong_renewal: Option<String>,
    #[serde(default)]
    pub critical_illness_rider: Option<String>,
    #[serde(default)]
    pub accident_disability_rider: Option<String>,
}

/// One prior message in the advisor request
#[derive(Debug, Clone, Serialize)]
pub struct WireHistoryEntry {
    pub sender: String,
    pub text: String,
}

/// Request body for `POST /gemini`
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorRequestBody {
    pub policy_id: String,
    pub policy_name: String,
    pub policy_company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uin: Option<String>,
    pub question: String,
    pub chat_history: Vec<WireHistoryEntry>,
    pub model: String,
}

/// Response body from `POST /gemini`
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorResponseBody {
    pub response: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}
