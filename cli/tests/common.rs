//! # svcctl Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`:
//!
//! - `svcctl_cmd_in`: the compiled binary, isolated from the developer's own
//!   configuration (HOME, XDG config dir and working directory all point into
//!   a temporary directory, `SVCCTL_*` variables are cleared).
//! - `StubService`: a small axum server on an ephemeral port that answers the
//!   operations the tests use and records every call it receives.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

const ENV_VARS: &[&str] = &[
    "SVCCTL_CONFIG",
    "SVCCTL_PROFILE",
    "SVCCTL_ENDPOINT",
    "SVCCTL_REGION",
    "SVCCTL_OUTPUT",
    "SVCCTL_API_KEY",
    "RUST_LOG",
];

/// The `svcctl` binary, running inside `dir` with no ambient configuration.
pub fn svcctl_cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("svcctl").expect("Failed to find svcctl binary for testing");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// One request received by the stub.
#[derive(Debug, Clone)]
pub struct Call {
    pub operation: String,
    pub body: Value,
    pub region: Option<String>,
    pub authorization: Option<String>,
}

type Calls = Arc<Mutex<Vec<Call>>>;

pub struct StubService {
    pub endpoint: String,
    calls: Calls,
}

impl StubService {
    /// Starts the stub on its own runtime thread.
    pub fn start() -> Self {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let state = calls.clone();
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub listener");
                tx.send(listener.local_addr().expect("stub address"))
                    .expect("report stub address");
                let app = Router::new()
                    .route("/{operation}", post(handle))
                    .with_state(state);
                axum::serve(listener, app).await.expect("stub server");
            });
        });

        let addr = rx.recv().expect("stub did not start");
        StubService {
            endpoint: format!("http://{addr}"),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|c| c.operation == operation).count()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn fault(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(json!({"__type": code, "message": message}))).into_response()
}

async fn handle(
    State(calls): State<Calls>,
    Path(operation): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let region = header(&headers, "x-service-region");
    calls.lock().unwrap().push(Call {
        operation: operation.clone(),
        body: body.clone(),
        region: region.clone(),
        authorization: header(&headers, "authorization"),
    });

    let text = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
    match operation.as_str() {
        "ListJobs" => {
            let page = match text("NextToken").as_str() {
                "" => json!({"JobNames": ["job-a", "job-b"], "NextToken": "T1"}),
                "T1" => json!({"JobNames": ["job-c"], "NextToken": "T2"}),
                "T2" => json!({"JobNames": [], "NextToken": "T3"}),
                _ => json!({"JobNames": ["job-d"]}),
            };
            Json(page).into_response()
        }
        "GetJob" => {
            let name = text("JobName");
            if name == "missing" {
                return fault(
                    StatusCode::BAD_REQUEST,
                    "EntityNotFoundException",
                    "Job missing not found",
                );
            }
            Json(json!({"Job": {"Name": name, "Role": "etl-role", "Region": region}})).into_response()
        }
        "DeleteJob" => Json(json!({"JobName": text("JobName")})).into_response(),
        "UpdateJob" => Json(json!({"JobName": text("JobName")})).into_response(),
        "DeregisterImage" => StatusCode::OK.into_response(),
        _ => fault(
            StatusCode::NOT_FOUND,
            "UnknownOperationException",
            &format!("{operation} is not served by the stub"),
        ),
    }
}
