//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `transport.rs`: one HTTP call, no policy; reqwest-backed or scripted.
//! - `clock.rs`: time source and the only blocking delay.
//! - `executor.rs`: retry with capped exponential backoff.
//! - `idempotency.rs`: canonical JSON + salted SHA-256 key.
//! - `submitter.rs`: POST the payload, extract the job id.
//! - `classifier.rs`: remote state label → succeeded/failed/in progress.
//! - `poller.rs`: poll-until-terminal with a wait budget.
//! - `deployment.rs`: submit → poll → record for one run.
//! - `recorder.rs`: artifact file writer.
//! - `schema.rs`: JSON Schema pre-flight check.
//! - `settings.rs`: flag/env/file resolution and secret redaction.
//! - `response.rs`: shared response interpretation helpers.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects go through `Transport` and `Clock` so tests stay fast.
//! - Keep command handlers thin; delegate to services.

pub mod classifier;
pub mod clock;
pub mod deployment;
pub mod executor;
pub mod idempotency;
pub mod output;
pub mod poller;
pub mod recorder;
pub mod response;
pub mod schema;
pub mod settings;
pub mod submitter;
pub mod transport;

#[cfg(test)]
pub mod test_support;
