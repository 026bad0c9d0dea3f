//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_bin(bin: &str, args: &[&str]) -> std::process::Output {
    Command::new(bin)
        .args(args)
        .env_remove("CONSUL_BASE_URL")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .output()
        .expect("failed to run binary")
}

fn register_service(args: &[&str]) -> std::process::Output {
    run_bin(env!("CARGO_BIN_EXE_register-service"), args)
}

#[test]
fn help_lists_all_flags() {
    let output = register_service(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for flag in ["--consul-base-url", "--name", "--port", "--address"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
    assert!(stdout.contains("http://consul:8500"));
}

#[test]
fn missing_name_shows_error() {
    let output = register_service(&["--port", "9001"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--name"));
}

#[test]
fn missing_port_shows_error() {
    let output = register_service(&["--name", "raft"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--port"));
}

#[test]
fn non_numeric_port_is_rejected() {
    let output = register_service(&["--name", "raft", "--port", "http"]);
    assert!(!output.status.success());
}

#[test]
fn unreachable_agent_exits_with_failure() {
    let output = register_service(&[
        "--consul-base-url",
        "http://127.0.0.1:1",
        "--name",
        "raft",
        "--port",
        "9001",
        "--address",
        "127.0.0.1",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert_eq!(stderr.trim_end().lines().count(), 1, "error reported once: {stderr}");
    assert!(stderr.starts_with("error: Consul request failed: "));
    // The OS-level cause at the bottom of the chain is kept.
    assert!(stderr.to_lowercase().contains("refused"), "cause missing: {stderr}");
}

#[test]
fn peers_help_shows_usage() {
    let output = run_bin(env!("CARGO_BIN_EXE_consul-peers"), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--name"));
}
