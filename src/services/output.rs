use crate::domain::models::{ErrorOut, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    ok: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Failure envelope for `--json`; text mode reports on stderr only.
pub fn print_error(json: bool, error: &anyhow::Error, exit_code: u8) {
    if json {
        let out = JsonOut {
            ok: false,
            data: ErrorOut {
                error: format!("{:#}", error),
                exit_code,
            },
        };
        if let Ok(s) = serde_json::to_string_pretty(&out) {
            println!("{}", s);
        }
    }
    eprintln!("error: {:#}", error);
}
