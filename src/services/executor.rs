//! Single HTTP call with bounded, unjittered exponential backoff.
//!
//! Used identically for submission and status polling. Outcomes fall into
//! three buckets:
//! - any response whose status is not retryable is returned as-is, 4xx
//!   included; callers decide what it means.
//! - a retryable status (429, 500, 502, 503, 504) is retried while budget
//!   remains.
//! - a transport failure (connect error, timeout) is retried the same way.
//!
//! Delays are `min(60, 2^attempt)` seconds: 1, 2, 4, 8, 16, 32, 60, 60, ...

use crate::domain::constants::{MAX_BACKOFF_SECS, RETRYABLE_STATUSES};
use crate::error::{DeployError, FailureCause};
use crate::services::clock::Clock;
use crate::services::transport::{HttpRequest, HttpResponse, Transport};
use std::time::Duration;
use tracing::warn;

pub fn is_retryable(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Delay before the retry that follows `attempt` (zero-based).
pub fn backoff_delay(attempt: u32) -> Duration {
    let secs = 2u64
        .checked_pow(attempt)
        .map_or(MAX_BACKOFF_SECS, |s| s.min(MAX_BACKOFF_SECS));
    Duration::from_secs(secs)
}

pub struct RequestExecutor<'a> {
    transport: &'a dyn Transport,
    clock: &'a dyn Clock,
    /// Additional attempts after the first one.
    max_retries: u32,
}

impl<'a> RequestExecutor<'a> {
    pub fn new(transport: &'a dyn Transport, clock: &'a dyn Clock, max_retries: u32) -> Self {
        Self {
            transport,
            clock,
            max_retries,
        }
    }

    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeployError> {
        let mut attempt: u32 = 0;
        loop {
            let cause = match self.transport.send(request) {
                Ok(response) if !is_retryable(response.status) => return Ok(response),
                Ok(response) => FailureCause::Status {
                    status: response.status,
                    body: response.body_text(),
                },
                Err(e) => FailureCause::Transport(e),
            };

            if attempt >= self.max_retries {
                return Err(DeployError::RequestFailed {
                    method: request.method,
                    url: request.url.clone(),
                    attempts: attempt + 1,
                    cause,
                });
            }

            let delay = backoff_delay(attempt);
            warn!(
                method = %request.method,
                url = %request.url,
                attempt = attempt + 1,
                max_retries = self.max_retries,
                sleep_secs = delay.as_secs(),
                cause = %cause,
                "transient failure, retrying"
            );
            self.clock.sleep(delay);
            attempt += 1;
        }
    }
}
