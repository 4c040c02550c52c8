use crate::domain::models::{ArtifactRecord, DeploymentPayload, TerminalResult};
use anyhow::Context;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Writes one `deploy-result-{jobId}.json` per run into the output directory.
pub struct ArtifactRecorder {
    dir: PathBuf,
}

impl ArtifactRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, job_id: &str) -> PathBuf {
        // job ids come from the remote side; keep them from escaping `dir`
        let safe: String = job_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("deploy-result-{}.json", safe))
    }

    pub fn record(
        &self,
        payload: &DeploymentPayload,
        result: &TerminalResult,
    ) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating artifact dir {}", self.dir.display()))?;

        let record = ArtifactRecord {
            job_id: result.job_id.clone(),
            outcome: result.outcome.as_str().to_string(),
            payload: payload.to_value(),
            submit_response: result.submission_response.clone(),
            final_status: result.final_status_response.clone().unwrap_or(Value::Null),
            timestamp_utc: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
        };

        let path = self.path_for(&result.job_id);
        std::fs::write(&path, serde_json::to_string_pretty(&record)?)
            .with_context(|| format!("writing artifact {}", path.display()))?;
        info!(path = %path.display(), "wrote artifact");
        Ok(path)
    }
}
