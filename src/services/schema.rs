use crate::domain::models::ValidationIssue;
use jsonschema::JSONSchema;
use serde_json::Value;

const ROOT_PATH: &str = "(root)";

/// One instance-path step. Array indices order numerically and before keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Index(usize),
    Key(String),
}

impl Segment {
    fn parse(raw: String) -> Self {
        match raw.parse::<usize>() {
            Ok(i) => Segment::Index(i),
            Err(_) => Segment::Key(raw),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Segment::Index(i) => i.to_string(),
            Segment::Key(k) => k.clone(),
        }
    }
}

/// Checks `payload` against `schema`; an empty result means it passed.
///
/// Issues are sorted by instance path so output is stable between runs.
pub fn validate_payload(payload: &Value, schema: &Value) -> anyhow::Result<Vec<ValidationIssue>> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow::anyhow!("invalid schema: {}", e))?;

    let mut found: Vec<(Vec<Segment>, String)> = match compiled.validate(payload) {
        Ok(()) => return Ok(vec![]),
        Err(errors) => errors
            .map(|e| {
                let path = pointer_segments(&e.instance_path.to_string())
                    .into_iter()
                    .map(Segment::parse)
                    .collect();
                (path, e.to_string())
            })
            .collect(),
    };
    found.sort();

    Ok(found
        .into_iter()
        .map(|(segments, message)| ValidationIssue {
            path: if segments.is_empty() {
                ROOT_PATH.to_string()
            } else {
                segments
                    .iter()
                    .map(Segment::as_text)
                    .collect::<Vec<_>>()
                    .join(".")
            },
            message,
        })
        .collect())
}

/// Splits a JSON pointer (`/spec/replicas`) into unescaped segments.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect()
}
