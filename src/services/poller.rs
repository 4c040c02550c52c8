//! Poll-until-terminal state machine.
//!
//! `Polling` is left for `Succeeded`, `Failed` or `TimedOut`. The wait budget
//! is checked once per iteration, before each status request, in whole
//! elapsed seconds; an in-flight request or sleep is never interrupted. Transport exhaustion inside the
//! executor aborts the whole run.

use crate::domain::constants::{
    HEADER_API_KEY, HEADER_CORRELATION_ID, MESSAGE_FIELDS, STATE_FIELDS,
};
use crate::domain::models::{NormalizedState, Outcome, StatusSnapshot};
use crate::error::DeployError;
use crate::services::classifier::classify;
use crate::services::clock::Clock;
use crate::services::executor::RequestExecutor;
use crate::services::response::{ensure_accepted, first_string, parse_body};
use crate::services::settings::Settings;
use crate::services::transport::{HttpRequest, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

impl StatusSnapshot {
    pub fn from_response(raw: Value) -> Self {
        let raw_state = first_string(&raw, &STATE_FIELDS)
            .unwrap_or_default()
            .to_lowercase();
        Self {
            normalized: classify(&raw_state),
            message: first_string(&raw, &MESSAGE_FIELDS),
            raw_state,
            raw,
        }
    }
}

#[derive(Debug)]
pub struct PollReport {
    pub outcome: Outcome,
    pub last_status: Option<StatusSnapshot>,
    pub elapsed: Duration,
    pub polls: u32,
}

pub struct JobPoller<'a> {
    executor: &'a RequestExecutor<'a>,
    clock: &'a dyn Clock,
    settings: &'a Settings,
}

impl<'a> JobPoller<'a> {
    pub fn new(
        executor: &'a RequestExecutor<'a>,
        clock: &'a dyn Clock,
        settings: &'a Settings,
    ) -> Self {
        Self {
            executor,
            clock,
            settings,
        }
    }

    fn status_request(&self, job_id: &str) -> HttpRequest {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            (HEADER_API_KEY.to_string(), self.settings.api_key.clone()),
        ];
        if let Some(id) = &self.settings.correlation_id {
            headers.push((HEADER_CORRELATION_ID.to_string(), id.clone()));
        }
        HttpRequest {
            method: Method::Get,
            url: self.settings.status_url(job_id),
            headers,
            body: None,
            timeout: self.settings.timeout,
        }
    }

    pub fn poll(&self, job_id: &str) -> Result<PollReport, DeployError> {
        let request = self.status_request(job_id);
        let start = self.clock.now();
        let mut last_status = None;
        let mut polls = 0u32;

        loop {
            let elapsed = self.clock.now().saturating_duration_since(start);
            if elapsed.as_secs() > self.settings.max_wait.as_secs() {
                error!(
                    job_id,
                    waited_secs = elapsed.as_secs(),
                    "timed out waiting for job"
                );
                return Ok(PollReport {
                    outcome: Outcome::TimedOut,
                    last_status,
                    elapsed,
                    polls,
                });
            }

            let response = self.executor.execute(&request)?;
            polls += 1;
            ensure_accepted(&request, &response)?;
            let snapshot =
                StatusSnapshot::from_response(parse_body(&request.url, &response.body)?);

            let outcome = match snapshot.normalized {
                NormalizedState::Succeeded => Outcome::Succeeded,
                NormalizedState::Failed => Outcome::Failed,
                NormalizedState::InProgress => {
                    let state = match snapshot.raw_state.as_str() {
                        "" => "unknown",
                        s => s,
                    };
                    info!(
                        job_id,
                        state,
                        elapsed_secs = elapsed.as_secs(),
                        message = snapshot.message.as_deref().unwrap_or(""),
                        "job in progress"
                    );
                    last_status = Some(snapshot);
                    self.clock.sleep(self.settings.poll_interval);
                    continue;
                }
            };

            match outcome {
                Outcome::Succeeded => info!(job_id, "deployment succeeded"),
                _ => error!(job_id, status = %snapshot.raw, "deployment failed"),
            }
            return Ok(PollReport {
                outcome,
                last_status: Some(snapshot),
                elapsed,
                polls,
            });
        }
    }
}
