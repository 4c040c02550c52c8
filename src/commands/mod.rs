//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `submit.rs`: the full submit/poll/record run.
//! - `validate.rs`: standalone schema pre-flight check.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Return the process exit code; errors carry their own.

pub mod submit;
pub mod validate;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> anyhow::Result<u8> {
    match &cli.command {
        Commands::Submit(args) => submit::handle_submit(cli, args),
        Commands::Validate { payload, schema } => {
            validate::handle_validate(cli.json, payload, schema)
        }
    }
}

pub(crate) fn read_json(path: &std::path::Path, what: &str) -> anyhow::Result<serde_json::Value> {
    use anyhow::Context;
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {} {}", what, path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {} {}", what, path.display()))
}
