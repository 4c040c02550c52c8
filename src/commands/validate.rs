use crate::commands::read_json;
use crate::domain::models::ValidationIssue;
use crate::error::{EXIT_CONFIG, EXIT_SUCCESS};
use crate::services::output::print_out;
use crate::services::schema::validate_payload;
use std::path::Path;

pub fn handle_validate(json: bool, payload: &Path, schema: &Path) -> anyhow::Result<u8> {
    let payload = read_json(payload, "payload")?;
    let schema = read_json(schema, "schema")?;
    let issues = validate_payload(&payload, &schema)?;

    if !json {
        if issues.is_empty() {
            println!("Payload schema validation OK.");
        } else {
            println!("Payload schema validation FAILED:\n");
        }
    }
    print_out(json, issues.is_empty(), &issues, format_issue)?;

    Ok(if issues.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_CONFIG
    })
}

pub fn format_issue(issue: &ValidationIssue) -> String {
    format!("- {}: {}", issue.path, issue.message)
}
