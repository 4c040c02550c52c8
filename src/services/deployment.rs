//! One run: submit, poll until terminal, record the artifact.

use crate::domain::models::{DeploymentPayload, TerminalResult};
use crate::services::clock::Clock;
use crate::services::executor::RequestExecutor;
use crate::services::poller::JobPoller;
use crate::services::recorder::ArtifactRecorder;
use crate::services::settings::Settings;
use crate::services::submitter::JobSubmitter;
use crate::services::transport::Transport;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunReport {
    pub result: TerminalResult,
    pub artifact: PathBuf,
}

pub fn run_deployment(
    payload: &DeploymentPayload,
    settings: &Settings,
    transport: &dyn Transport,
    clock: &dyn Clock,
    recorder: &ArtifactRecorder,
) -> anyhow::Result<RunReport> {
    let executor = RequestExecutor::new(transport, clock, settings.max_retries);

    let submission = JobSubmitter::new(&executor, settings).submit(payload)?;
    let report = JobPoller::new(&executor, clock, settings).poll(&submission.job_id)?;

    let result = TerminalResult {
        job_id: submission.job_id,
        outcome: report.outcome,
        submission_response: submission.raw,
        final_status_response: report.last_status.map(|s| s.raw),
        elapsed: report.elapsed,
        polls: report.polls,
    };
    let artifact = recorder.record(payload, &result)?;
    Ok(RunReport { result, artifact })
}
