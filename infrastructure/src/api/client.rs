//! HTTP client for the poliscope backend

use super::error::{ApiError, Result};
use super::types::{AdvisorRequestBody, AdvisorResponseBody, BackendPolicy, WireHistoryEntry};
use crate::catalog::normalize::normalize_policy;
use async_trait::async_trait;
use poliscope_application::{AdvisorGateway, AdvisorQuestion, AdvisorReply, CatalogSource, GatewayError};
use poliscope_domain::{Policy, Sender};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Number of policies requested per catalog fetch
const POLICY_FETCH_LIMIT: u32 = 100;

/// Client for the backend REST API
///
/// Catalog reads are infallible by contract: any failure is logged and
/// surfaces as an empty list so the caller keeps its fallback data.
/// Advisor questions are fallible and return [`ApiError`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::ConnectionError(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_secs,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Fetch the policy catalog. Returns an empty list on any failure.
    pub async fn fetch_policies(&self) -> Vec<Policy> {
        let url = self.url(&format!("/policies?limit={}", POLICY_FETCH_LIMIT));
        debug!(%url, "fetching policy catalog");

        let raw: Vec<BackendPolicy> = match self.get_json(&url).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "catalog fetch failed, keeping fallback data");
                return Vec::new();
            }
        };

        let total = raw.len();
        let policies: Vec<Policy> = raw.into_iter().filter_map(normalize_policy).collect();
        if policies.len() < total {
            warn!(
                dropped = total - policies.len(),
                "skipped policies with unrecognized type"
            );
        }
        info!(count = policies.len(), "loaded policies from backend");
        policies
    }

    /// Fetch a single policy by id.
    pub async fn fetch_policy(&self, policy_id: &str) -> Result<Option<Policy>> {
        let raw: BackendPolicy = self.get_json(&self.url(&format!("/policies/{}", policy_id))).await?;
        Ok(normalize_policy(raw))
    }

    /// Fetch catalog statistics as raw JSON.
    pub async fn fetch_statistics(&self) -> Result<serde_json::Value> {
        self.get_json(&self.url("/statistics")).await
    }

    /// Fetch the list of provider names.
    pub async fn fetch_providers(&self) -> Result<Vec<String>> {
        self.get_json(&self.url("/providers")).await
    }

    /// Fetch the list of category names.
    pub async fn fetch_categories(&self) -> Result<Vec<String>> {
        self.get_json(&self.url("/categories")).await
    }

    /// Ask the advisor a question about a policy.
    pub async fn ask_advisor(&self, question: &AdvisorQuestion) -> Result<AdvisorReply> {
        let body = AdvisorRequestBody {
            policy_id: question.policy.id.clone(),
            policy_name: question.policy.name.clone(),
            policy_company: question.policy.company.clone(),
            product_uin: question.policy.product_uin.clone(),
            question: question.question.clone(),
            chat_history: question
                .history
                .iter()
                .map(|m| WireHistoryEntry {
                    sender: match m.sender {
                        Sender::User => "user".to_string(),
                        Sender::Bot => "bot".to_string(),
                    },
                    text: m.text.clone(),
                })
                .collect(),
            model: self.model.clone(),
        };

        let response = self
            .http
            .post(self.url("/gemini"))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let reply: AdvisorResponseBody = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(AdvisorReply {
            response: reply.response,
            follow_up_questions: reply.follow_up_questions,
        })
    }

    fn request_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            err.into()
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn list_policies(&self) -> Vec<Policy> {
        self.fetch_policies().await
    }
}

#[async_trait]
impl AdvisorGateway for ApiClient {
    async fn ask(&self, question: AdvisorQuestion) -> std::result::Result<AdvisorReply, GatewayError> {
        self.ask_advisor(&question).await.map_err(|err| match err {
            ApiError::ConnectionError(msg) => GatewayError::ConnectionError(msg),
            ApiError::HttpStatus { status } => GatewayError::HttpStatus { status },
            ApiError::MalformedResponse(msg) => GatewayError::MalformedResponse(msg),
            ApiError::Timeout { .. } => GatewayError::Timeout,
        })
    }
}
