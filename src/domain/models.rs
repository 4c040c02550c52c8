use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
    pub exit_code: u8,
}

/// Caller-owned deployment document. The core never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentPayload(Map<String, Value>);

impl DeploymentPayload {
    /// Accepts only JSON objects; anything else is not a deployment description.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Lowercase hex SHA-256 digest used as the `Idempotency-Key` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form that is safe to log.
    pub fn prefix(&self) -> &str {
        &self.0[..self.0.len().min(8)]
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoping identifiers of the pipeline run that feed the idempotency salt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    pub source_version: String,
    pub build_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub job_id: String,
    pub raw: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedState {
    Succeeded,
    Failed,
    InProgress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub raw_state: String,
    pub normalized: NormalizedState,
    pub message: Option<String>,
    pub raw: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Failed,
    TimedOut,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Failed => "failed",
            Outcome::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produced exactly once per run, when polling stops.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalResult {
    pub job_id: String,
    pub outcome: Outcome,
    pub submission_response: Value,
    /// `None` only when the wait budget ran out before any status arrived.
    pub final_status_response: Option<Value>,
    pub elapsed: Duration,
    pub polls: u32,
}

/// On-disk artifact schema. Field names are part of the pipeline contract.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    pub job_id: String,
    pub outcome: String,
    pub payload: Value,
    pub submit_response: Value,
    pub final_status: Value,
    pub timestamp_utc: String,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub job_id: String,
    pub outcome: Outcome,
    pub polls: u32,
    pub elapsed_secs: u64,
    pub artifact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}
