#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

const INHERITED_VARS: &[&str] = &[
    "DEPLOY_API_BASE_URL",
    "DEPLOY_API_KEY",
    "DEPLOY_API_TIMEOUT",
    "DEPLOY_API_POLL_SECONDS",
    "DEPLOY_API_MAX_WAIT",
    "DEPLOY_API_MAX_RETRIES",
    "DEPLOY_API_SUBMIT_PATH",
    "DEPLOY_API_STATUS_PATH_TEMPLATE",
    "BUILD_SOURCEVERSION",
    "BUILD_BUILDID",
    "SYSTEM_JOBID",
    "BUILD_ARTIFACTSTAGINGDIRECTORY",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "ALL_PROXY",
    "all_proxy",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let out = root.join("artifacts");
        Self {
            _tmp: tmp,
            root,
            out,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("deployctl");
        for var in INHERITED_VARS.iter().copied() {
            cmd.env_remove(var);
        }
        cmd.env("NO_PROXY", "127.0.0.1").current_dir(&self.root);
        cmd
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, serde_json::to_string_pretty(value).expect("serialize"))
            .expect("write fixture");
        path
    }

    /// `deployctl --json submit` against `api` with fast polling and no retries.
    pub fn submit(&self, api: &MockApi, payload: &Path) -> Command {
        self.submit_tuned(api, payload, 0, 30, 0)
    }

    pub fn submit_tuned(
        &self,
        api: &MockApi,
        payload: &Path,
        poll: u64,
        max_wait: u64,
        max_retries: u32,
    ) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--json", "submit", "--payload"])
            .arg(payload)
            .arg("--base-url")
            .arg(api.base_url())
            .args(["--api-key", "test-key-0123456789"])
            .arg("--poll")
            .arg(poll.to_string())
            .arg("--max-wait")
            .arg(max_wait.to_string())
            .arg("--max-retries")
            .arg(max_retries.to_string())
            .arg("--output-dir")
            .arg(&self.out);
        cmd
    }

    pub fn read_artifact(&self, job_id: &str) -> Value {
        let raw = fs::read_to_string(self.out.join(format!("deploy-result-{}.json", job_id)))
            .expect("artifact written");
        serde_json::from_str(&raw).expect("artifact json")
    }
}

pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("valid json output")
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Loopback HTTP server replaying canned `(status, body)` pairs in order.
///
/// Requests past the end of the script get `410 Gone` so a runaway client
/// fails fast instead of retrying.
pub struct MockApi {
    port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn start(script: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let mut script: Vec<(u16, String)> = script
            .into_iter()
            .map(|(s, b)| (s, b.to_string()))
            .rev()
            .collect();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                seen.lock().expect("lock").push(request);
                let (status, body) = script
                    .pop()
                    .unwrap_or((410, r#"{"error":"script exhausted"}"#.to_string()));
                let reply = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { port, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut h = String::new();
        reader.read_line(&mut h).ok()?;
        let h = h.trim_end();
        if h.is_empty() {
            break;
        }
        if let Some((k, v)) = h.split_once(':') {
            let (k, v) = (k.trim().to_string(), v.trim().to_string());
            if k.eq_ignore_ascii_case("content-length") {
                content_length = v.parse().unwrap_or(0);
            }
            headers.push((k, v));
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
