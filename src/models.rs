use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A successful rephrase, kept alongside the headline that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleResult {
    pub original: String,
    pub rephrased: String,
}

impl TitleResult {
    pub fn new(original: impl Into<String>, rephrased: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            rephrased: rephrased.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient error notification shown over the main screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub raised_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub functions_url: String,
    #[serde(default = "default_function_name")]
    pub function_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u64,
}

fn default_function_name() -> String {
    "rephrase-title".to_string()
}

const fn default_timeout() -> u64 {
    60
}

const fn default_toast_duration() -> u64 {
    4
}

impl AppConfig {
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            functions_url: "http://localhost:54321".to_string(),
            function_name: default_function_name(),
            api_key: String::new(),
            request_timeout: default_timeout(),
            toast_duration_secs: default_toast_duration(),
        }
    }
}
