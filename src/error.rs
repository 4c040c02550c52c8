//! Fatal error taxonomy and the process exit codes pipelines branch on.
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | remote job succeeded |
//! | 1 | unexpected error (I/O, unreadable payload, artifact write) |
//! | 2 | missing required configuration, or payload fails schema validation |
//! | 3 | malformed response (missing job id, non-JSON body) |
//! | 4 | wait budget exceeded |
//! | 5 | remote job reported failure |
//! | 6 | request failed after retries |
//! | 7 | request rejected with a non-retryable HTTP status |

use crate::domain::models::Outcome;
use crate::services::transport::{Method, TransportError};
use std::fmt;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_UNEXPECTED: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_MALFORMED_RESPONSE: u8 = 3;
pub const EXIT_TIMED_OUT: u8 = 4;
pub const EXIT_REMOTE_FAILURE: u8 = 5;
pub const EXIT_REQUEST_FAILED: u8 = 6;
pub const EXIT_REJECTED: u8 = 7;

/// What the last attempt of an exhausted request ran into.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureCause {
    Status { status: u16, body: String },
    Transport(TransportError),
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            FailureCause::Transport(e) if e.timed_out => write!(f, "timed out: {}", e),
            FailureCause::Transport(e) => write!(f, "{}", e),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeployError {
    #[error("missing {what}. Provide {flag} or set {env}")]
    MissingConfig {
        what: &'static str,
        flag: &'static str,
        env: &'static str,
    },
    #[error("payload schema validation failed with {0} issue(s)")]
    SchemaViolations(usize),
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
    #[error("{method} {url} failed after {attempts} attempt(s): {cause}")]
    RequestFailed {
        method: Method,
        url: String,
        attempts: u32,
        cause: FailureCause,
    },
    #[error("{method} {url} rejected with HTTP {status}: {body}")]
    Rejected {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },
}

impl DeployError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DeployError::MissingConfig { .. } | DeployError::SchemaViolations(_) => EXIT_CONFIG,
            DeployError::MalformedResponse { .. } => EXIT_MALFORMED_RESPONSE,
            DeployError::RequestFailed { .. } => EXIT_REQUEST_FAILED,
            DeployError::Rejected { .. } => EXIT_REJECTED,
        }
    }
}

pub fn outcome_exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Succeeded => EXIT_SUCCESS,
        Outcome::Failed => EXIT_REMOTE_FAILURE,
        Outcome::TimedOut => EXIT_TIMED_OUT,
    }
}

/// Maps any error surfaced at the binary edge to its exit code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DeployError>())
        .map(DeployError::exit_code)
        .unwrap_or(EXIT_UNEXPECTED)
}
