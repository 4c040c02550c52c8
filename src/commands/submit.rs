use crate::cli::{Cli, SubmitArgs};
use crate::commands::read_json;
use crate::commands::validate::format_issue;
use crate::domain::models::{DeploymentPayload, Outcome, RunSummary};
use crate::error::{outcome_exit_code, DeployError};
use crate::services::clock::SystemClock;
use crate::services::deployment::run_deployment;
use crate::services::output::print_one;
use crate::services::recorder::ArtifactRecorder;
use crate::services::schema::validate_payload;
use crate::services::settings::{load_file_config, Settings};
use crate::services::transport::ReqwestTransport;
use tracing::info;

pub fn handle_submit(cli: &Cli, args: &SubmitArgs) -> anyhow::Result<u8> {
    let file = load_file_config(cli.config.as_deref())?;
    let settings = Settings::resolve(args, &file, |key| std::env::var(key).ok())?;

    let raw = read_json(&args.payload, "payload")?;
    if let Some(schema_path) = &args.schema {
        let schema = read_json(schema_path, "schema")?;
        let issues = validate_payload(&raw, &schema)?;
        if !issues.is_empty() {
            for issue in &issues {
                eprintln!("{}", format_issue(issue));
            }
            return Err(DeployError::SchemaViolations(issues.len()).into());
        }
        info!("payload schema validation OK");
    }
    let payload = DeploymentPayload::from_value(raw).ok_or_else(|| {
        anyhow::anyhow!("payload {} must be a JSON object", args.payload.display())
    })?;

    let transport = ReqwestTransport::new()?;
    let recorder = ArtifactRecorder::new(&settings.output_dir);
    let run = run_deployment(&payload, &settings, &transport, &SystemClock, &recorder)?;

    let outcome = run.result.outcome;
    let summary = RunSummary {
        job_id: run.result.job_id,
        outcome,
        polls: run.result.polls,
        elapsed_secs: run.result.elapsed.as_secs(),
        artifact: run.artifact.to_string_lossy().to_string(),
    };
    print_one(cli.json, outcome == Outcome::Succeeded, summary, |s| {
        format!(
            "job {} {} after {} poll(s) in {}s; artifact {}",
            s.job_id, s.outcome, s.polls, s.elapsed_secs, s.artifact
        )
    })?;

    Ok(outcome_exit_code(outcome))
}
