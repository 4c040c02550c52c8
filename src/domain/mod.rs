//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: payload, key, snapshot, terminal result and output structs.
//! - `constants.rs`: defaults, header names, state vocabularies, env var names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `ArtifactRecord` and the `--json` envelopes are read by downstream
//! pipeline steps. Keep schema-impacting changes explicit.

pub mod constants;
pub mod models;
