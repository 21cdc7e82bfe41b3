// Client for the remote `rephrase-title` function

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::AppConfig;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// What a completed call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RephraseReply {
    Rephrased(String),
    /// The function ran but declined, with a reason meant for the user.
    Rejected(String),
}

/// Any failure to get a well-formed reply out of the function.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("function returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RephraseService: Send + Sync {
    async fn rephrase(&self, title: &str) -> Result<RephraseReply, ApiError>;
}

#[derive(Debug, Serialize)]
pub struct RephraseRequest<'a> {
    pub title: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RephraseResponse {
    #[serde(default)]
    pub rephrased_title: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RephraseResponse {
    pub fn into_reply(self) -> Result<RephraseReply, ApiError> {
        // An empty error string means no error
        match (self.error.filter(|reason| !reason.is_empty()), self.rephrased_title) {
            (Some(reason), _) => Ok(RephraseReply::Rejected(reason)),
            (None, Some(title)) => Ok(RephraseReply::Rephrased(title)),
            (None, None) => Err(ApiError::Malformed(
                "neither rephrasedTitle nor error present".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionsClient {
    base_url: String,
    function_name: String,
    api_key: Option<String>,
    client: Client,
}

impl FunctionsClient {
    pub fn new(
        base_url: &str,
        function_name: &str,
        api_key: Option<String>,
        request_timeout: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            function_name: function_name.to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.functions_url,
            &config.function_name,
            Some(config.api_key.clone()),
            config.request_timeout,
        )
    }

    pub fn function_url(&self) -> String {
        format!("{}/functions/v1/{}", self.base_url, self.function_name)
    }

    /// True when the functions host answers at all, whatever the status.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
            .is_ok()
    }
}

#[async_trait]
impl RephraseService for FunctionsClient {
    async fn rephrase(&self, title: &str) -> Result<RephraseReply, ApiError> {
        let mut request = self
            .client
            .post(self.function_url())
            .json(&RephraseRequest { title });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }

        let body: RephraseResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Malformed(e.to_string()))?;

        body.into_reply()
    }
}
