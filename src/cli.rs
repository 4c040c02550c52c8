use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "deployctl",
    version,
    about = "Submit a deployment job and wait for its outcome"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Optional TOML settings file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the payload, poll until the job finishes, write the artifact.
    Submit(SubmitArgs),
    /// Check a payload against a JSON Schema document.
    Validate {
        #[arg(long)]
        payload: PathBuf,
        #[arg(long)]
        schema: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[arg(long, help = "Path to payload JSON")]
    pub payload: PathBuf,
    #[arg(long, env = "DEPLOY_API_BASE_URL", help = "Base URL, e.g. https://deploy-api.internal")]
    pub base_url: Option<String>,
    #[arg(long, env = "DEPLOY_API_KEY", hide_env_values = true, help = "API key (prefer env var)")]
    pub api_key: Option<String>,
    #[arg(long, env = "DEPLOY_API_TIMEOUT", help = "Per-request timeout in seconds [default: 30]")]
    pub timeout: Option<u64>,
    #[arg(long, env = "DEPLOY_API_POLL_SECONDS", help = "Seconds between status checks [default: 10]")]
    pub poll: Option<u64>,
    #[arg(long, env = "DEPLOY_API_MAX_WAIT", help = "Overall wait budget in seconds [default: 3600]")]
    pub max_wait: Option<u64>,
    #[arg(long, env = "DEPLOY_API_MAX_RETRIES", help = "Retries per request after the first attempt [default: 6]")]
    pub max_retries: Option<u32>,
    #[arg(long, env = "DEPLOY_API_SUBMIT_PATH", help = "Submission path [default: /deployments]")]
    pub submit_path: Option<String>,
    #[arg(
        long,
        env = "DEPLOY_API_STATUS_PATH_TEMPLATE",
        help = "Status path with {jobId} placeholder [default: /deployments/{jobId}]"
    )]
    pub status_path_template: Option<String>,
    #[arg(long, help = "Correlation id [default: $BUILD_BUILDID or $SYSTEM_JOBID]")]
    pub correlation_id: Option<String>,
    #[arg(long, help = "Artifact directory [default: $BUILD_ARTIFACTSTAGINGDIRECTORY or artifacts]")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, help = "Validate the payload against this JSON Schema before submitting")]
    pub schema: Option<PathBuf>,
}
