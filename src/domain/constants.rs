pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_SECS: u64 = 10;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 60 * 60;
pub const DEFAULT_MAX_RETRIES: u32 = 6;
pub const DEFAULT_SUBMIT_PATH: &str = "/deployments";
pub const DEFAULT_STATUS_PATH_TEMPLATE: &str = "/deployments/{jobId}";
pub const DEFAULT_OUTPUT_DIR: &str = "artifacts";

pub const JOB_ID_PLACEHOLDER: &str = "{jobId}";

pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
pub const MAX_BACKOFF_SECS: u64 = 60;

/// Checked in order; the first non-empty string wins.
pub const JOB_ID_FIELDS: [&str; 3] = ["jobId", "id", "deploymentId"];
pub const STATE_FIELDS: [&str; 2] = ["status", "state"];
pub const MESSAGE_FIELDS: [&str; 2] = ["message", "summary"];

pub const SUCCESS_STATES: [&str; 3] = ["succeeded", "success", "completed"];
pub const FAILURE_STATES: [&str; 4] = ["failed", "error", "cancelled", "canceled"];

pub const HEADER_API_KEY: &str = "X-API-Key";
pub const HEADER_IDEMPOTENCY_KEY: &str = "Idempotency-Key";
pub const HEADER_CORRELATION_ID: &str = "X-Correlation-Id";

pub const ENV_BASE_URL: &str = "DEPLOY_API_BASE_URL";
pub const ENV_API_KEY: &str = "DEPLOY_API_KEY";
pub const ENV_SOURCE_VERSION: &str = "BUILD_SOURCEVERSION";
pub const ENV_BUILD_ID: &str = "BUILD_BUILDID";
pub const ENV_SYSTEM_JOB_ID: &str = "SYSTEM_JOBID";
pub const ENV_ARTIFACT_DIR: &str = "BUILD_ARTIFACTSTAGINGDIRECTORY";
