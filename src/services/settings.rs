//! Settings resolution: command line > environment > TOML file > defaults.
//!
//! clap already folds the environment into the parsed arguments for the
//! flags that have an `env` fallback, so this layer only merges in the
//! optional file and the run-scoped CI variables.

use crate::cli::SubmitArgs;
use crate::domain::constants::*;
use crate::domain::models::RunContext;
use crate::error::DeployError;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub poll_secs: Option<u64>,
    pub max_wait_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub submit_path: Option<String>,
    pub status_path_template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
}

pub fn load_file_config(path: Option<&Path>) -> anyhow::Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub poll_interval: Duration,
    pub max_wait: Duration,
    pub max_retries: u32,
    pub submit_path: String,
    pub status_path_template: String,
    pub correlation_id: Option<String>,
    pub output_dir: PathBuf,
    pub context: RunContext,
}

fn non_empty(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl Settings {
    pub fn resolve(
        args: &SubmitArgs,
        file: &FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DeployError> {
        let lookup = |key: &str| non_empty(env(key).as_deref());

        let base_url = non_empty(args.base_url.as_deref())
            .or_else(|| non_empty(file.api.base_url.as_deref()))
            .ok_or(DeployError::MissingConfig {
                what: "base URL",
                flag: "--base-url",
                env: ENV_BASE_URL,
            })?;
        let api_key = non_empty(args.api_key.as_deref())
            .or_else(|| non_empty(file.api.api_key.as_deref()))
            .ok_or(DeployError::MissingConfig {
                what: "API key",
                flag: "--api-key",
                env: ENV_API_KEY,
            })?;

        let secs = |flag: Option<u64>, from_file: Option<u64>, default: u64| {
            Duration::from_secs(flag.or(from_file).unwrap_or(default))
        };

        Ok(Self {
            base_url,
            api_key,
            timeout: secs(args.timeout, file.api.timeout_secs, DEFAULT_TIMEOUT_SECS),
            poll_interval: secs(args.poll, file.api.poll_secs, DEFAULT_POLL_SECS),
            max_wait: secs(args.max_wait, file.api.max_wait_secs, DEFAULT_MAX_WAIT_SECS),
            max_retries: args
                .max_retries
                .or(file.api.max_retries)
                .unwrap_or(DEFAULT_MAX_RETRIES),
            submit_path: args
                .submit_path
                .clone()
                .or_else(|| file.api.submit_path.clone())
                .unwrap_or_else(|| DEFAULT_SUBMIT_PATH.to_string()),
            status_path_template: args
                .status_path_template
                .clone()
                .or_else(|| file.api.status_path_template.clone())
                .unwrap_or_else(|| DEFAULT_STATUS_PATH_TEMPLATE.to_string()),
            correlation_id: non_empty(args.correlation_id.as_deref())
                .or_else(|| lookup(ENV_BUILD_ID))
                .or_else(|| lookup(ENV_SYSTEM_JOB_ID)),
            output_dir: args
                .output_dir
                .clone()
                .or_else(|| lookup(ENV_ARTIFACT_DIR).map(PathBuf::from))
                .or_else(|| file.output.dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            context: RunContext {
                source_version: lookup(ENV_SOURCE_VERSION).unwrap_or_default(),
                build_id: lookup(ENV_BUILD_ID).unwrap_or_default(),
            },
        })
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn submit_url(&self) -> String {
        format!("{}{}", self.base(), self.submit_path)
    }

    pub fn status_url(&self, job_id: &str) -> String {
        format!(
            "{}{}",
            self.base(),
            self.status_path_template.replace(JOB_ID_PLACEHOLDER, job_id)
        )
    }

    /// Ties the idempotency key to this run and this target.
    pub fn idempotency_salt(&self) -> String {
        format!(
            "{}|{}|{}",
            self.context.source_version, self.context.build_id, self.base_url
        )
    }
}

/// `abcd****wxyz`, or `****` for short secrets.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}
