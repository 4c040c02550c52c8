use crate::domain::constants::{
    HEADER_API_KEY, HEADER_CORRELATION_ID, HEADER_IDEMPOTENCY_KEY, JOB_ID_FIELDS,
};
use crate::domain::models::{DeploymentPayload, SubmissionResult};
use crate::error::DeployError;
use crate::services::executor::RequestExecutor;
use crate::services::idempotency::derive_key;
use crate::services::response::{ensure_accepted, first_string, parse_body};
use crate::services::settings::{redact, Settings};
use crate::services::transport::{HttpRequest, Method};
use tracing::{error, info};

pub struct JobSubmitter<'a> {
    executor: &'a RequestExecutor<'a>,
    settings: &'a Settings,
}

impl<'a> JobSubmitter<'a> {
    pub fn new(executor: &'a RequestExecutor<'a>, settings: &'a Settings) -> Self {
        Self { executor, settings }
    }

    pub fn build_request(&self, payload: &DeploymentPayload) -> HttpRequest {
        let key = derive_key(payload, &self.settings.idempotency_salt());
        let url = self.settings.submit_url();

        info!(url = %url, "submitting deployment");
        info!(
            idempotency_key = %key.prefix(),
            api_key = %redact(&self.settings.api_key),
            "request identity"
        );

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            (HEADER_API_KEY.to_string(), self.settings.api_key.clone()),
            (HEADER_IDEMPOTENCY_KEY.to_string(), key.to_string()),
        ];
        if let Some(id) = &self.settings.correlation_id {
            headers.push((HEADER_CORRELATION_ID.to_string(), id.clone()));
        }

        // compact JSON; rendering a `Value` cannot fail
        let body = payload.to_value().to_string().into_bytes();

        HttpRequest {
            method: Method::Post,
            url,
            headers,
            body: Some(body),
            timeout: self.settings.timeout,
        }
    }

    pub fn submit(&self, payload: &DeploymentPayload) -> Result<SubmissionResult, DeployError> {
        let request = self.build_request(payload);
        let response = self.executor.execute(&request)?;
        ensure_accepted(&request, &response)?;

        let raw = parse_body(&request.url, &response.body)?;
        let Some(job_id) = first_string(&raw, &JOB_ID_FIELDS) else {
            error!(status = response.status, response = %raw, "submit response missing job id");
            return Err(DeployError::MalformedResponse {
                url: request.url,
                reason: format!(
                    "response has none of {} (status {})",
                    JOB_ID_FIELDS.join(", "),
                    response.status
                ),
            });
        };

        info!(job_id = %job_id, "deployment accepted");
        Ok(SubmissionResult { job_id, raw })
    }
}
