use crate::domain::models::{DeploymentPayload, IdempotencyKey};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Serializes a `Value` canonically:
/// - object keys sorted
/// - no insignificant whitespace
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (k, v)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::from(k.as_str()).to_string());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// `sha256(canonical(payload) ++ salt)` as lowercase hex.
pub fn derive_key(payload: &DeploymentPayload, salt: &str) -> IdempotencyKey {
    let mut hasher = Sha256::new();
    hasher.update(to_canonical_json(&payload.to_value()).as_bytes());
    hasher.update(salt.as_bytes());
    IdempotencyKey::from_digest(&hasher.finalize())
}
