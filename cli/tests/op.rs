//! # svcctl Op Integration Tests
//!
//! File: cli/tests/op.rs
//!
//! End-to-end runs of `svcctl op` against the stub service: pagination modes,
//! the confirmation gate, output selection and error reporting.
//!

mod common;
use common::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn test_listing_follows_every_page() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "list-jobs"])
        .assert()
        .success()
        .stdout("job-a\njob-b\njob-c\njob-d\n")
        // Automatic mode reports no progress.
        .stderr(predicate::str::contains("Page").not());

    // The empty page carrying a token is followed as well.
    assert_eq!(stub.count("ListJobs"), 4);
    let tokens: Vec<Value> = stub.calls().iter().map(|c| c.body["NextToken"].clone()).collect();
    assert_eq!(tokens, vec![Value::Null, json!("T1"), json!("T2"), json!("T3")]);
}

#[test]
fn test_starting_token_fetches_one_page() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "list-jobs", "--next-token", "T1"])
        .assert()
        .success()
        .stdout("job-c\n")
        .stderr(predicate::str::contains("Next token: T2"));

    assert_eq!(stub.count("ListJobs"), 1);
}

#[test]
fn test_cap_limits_page_size_and_reports_progress() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "list-jobs", "--max-items", "2"])
        .assert()
        .success()
        .stdout("job-a\njob-b\n")
        .stderr(
            predicate::str::contains("Fetched 2 item(s) in 1 page(s)")
                .and(predicate::str::contains("Next token: T1")),
        );

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body["MaxResults"], json!(2));
}

#[test]
fn test_declined_confirmation_sends_nothing() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "delete-job", "--job-name", "nightly"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout("")
        .stderr(
            predicate::str::contains("delete-job (DeleteJob)")
                .and(predicate::str::contains("nightly"))
                .and(predicate::str::contains("Error").not()),
        );

    assert!(stub.calls().is_empty());
}

#[test]
fn test_end_of_input_declines() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "deregister-image", "--image-id", "ami-1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");

    assert!(stub.calls().is_empty());
}

#[test]
fn test_affirmative_answer_runs_operation() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "delete-job", "--job-name", "nightly"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout("nightly\n");

    assert_eq!(stub.count("DeleteJob"), 1);
}

#[test]
fn test_force_skips_prompt() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "delete-job", "--job-name", "nightly", "--force"])
        .assert()
        .success()
        .stdout("nightly\n")
        .stderr(predicate::str::contains("Proceed?").not());

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body, json!({"JobName": "nightly"}));
}

#[test]
fn test_absent_nested_members_are_omitted() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args([
            "--endpoint",
            &stub.endpoint,
            "op",
            "update-job",
            "--job-name",
            "nightly",
            "--script-location",
            "s3://bucket/etl.py",
            "-f",
        ])
        .assert()
        .success();

    assert_eq!(
        stub.calls()[0].body,
        json!({
            "JobName": "nightly",
            "JobUpdate": {"Command": {"ScriptLocation": "s3://bucket/etl.py"}}
        })
    );
}

#[test]
fn test_json_output_with_select_and_trailing_region() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    let assert = svcctl_cmd_in(dir.path())
        .args([
            "--endpoint",
            &stub.endpoint,
            "op",
            "GetJob",
            "--job-name",
            "nightly",
            "--select",
            "Job",
            "--region",
            "eu-west-1",
            "-o",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let record: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["Name"], "nightly");
    assert_eq!(record["Region"], "eu-west-1");
    assert_eq!(stub.calls()[0].region.as_deref(), Some("eu-west-1"));
}

#[test]
fn test_api_key_sent_as_bearer_token() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .env("SVCCTL_API_KEY", "k-123")
        .args(["--endpoint", &stub.endpoint, "op", "get-job", "--job-name", "nightly"])
        .assert()
        .success();

    assert_eq!(stub.calls()[0].authorization.as_deref(), Some("Bearer k-123"));
}

#[test]
fn test_verbose_flag_after_operation_enables_logging() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "get-job", "--job-name", "nightly", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Running GetJob against"));

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "get-job", "--job-name", "nightly"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Running GetJob").not());
}

#[test]
fn test_service_error_is_reported_once() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    let assert = svcctl_cmd_in(dir.path())
        .args(["--endpoint", &stub.endpoint, "op", "get-job", "--job-name", "missing"])
        .assert()
        .failure()
        .code(1)
        .stdout("");

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("GetJob failed with HTTP 400 (EntityNotFoundException): Job missing not found"));
    assert_eq!(stderr.matches("Error:").count(), 1);
}

#[test]
fn test_error_record_as_json() {
    let stub = StubService::start();
    let dir = tempdir().unwrap();

    let assert = svcctl_cmd_in(dir.path())
        .args([
            "--endpoint",
            &stub.endpoint,
            "--output",
            "json-lines",
            "op",
            "get-job",
            "--job-name",
            "missing",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let line = stderr.lines().find(|l| l.starts_with('{')).expect("error record line");
    let record: Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["operation"], "GetJob");
    assert_eq!(record["category"], "service");
    assert_eq!(record["status"], 400);
    assert_eq!(record["code"], "EntityNotFoundException");
    assert!(record["occurred_at"].is_string());
}

#[test]
fn test_unknown_operation() {
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["op", "list-widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation 'list-widgets'"));
}

#[test]
fn test_operation_help_lists_fields() {
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["op", "list-connections", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--name-prefix")
                .and(predicate::str::contains("--max-items"))
                .and(predicate::str::contains("ListConnections")),
        );
}

#[test]
fn test_missing_required_flag_is_a_usage_error() {
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["op", "get-job"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--job-name"));
}

#[test]
fn test_unresolvable_endpoint_names_endpoint() {
    let dir = tempdir().unwrap();

    svcctl_cmd_in(dir.path())
        .args(["--endpoint", "http://svcctl-test.invalid", "op", "get-job", "--job-name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name resolution failed").and(
            predicate::str::contains("svcctl-test.invalid"),
        ));
}
