//! Startup scenario tests for the `fxcoach` binary.
//!
//! These spawn the real binary and assert the process-level contract:
//! missing credentials and failed session setup exit non-zero with a
//! diagnostic, and no broker connection is attempted before the
//! configuration is complete.

use std::io::ErrorKind;
use std::net::TcpListener;
use std::process::{Command, Output};

fn fxcoach() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fxcoach"));
    // Start from a known configuration regardless of the test environment.
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("AGENT_JWT")
        .env_remove("FXCOACH_BROKER_URL")
        .env_remove("FXCOACH_MODEL")
        .env_remove("FXCOACH_PROVIDER_URL");
    cmd
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_credentials_exit_nonzero_without_connecting() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let output = fxcoach()
        .env("FXCOACH_BROKER_URL", format!("ws://{addr}"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("required credential OPENAI_API_KEY"),
        "stderr was: {stderr}"
    );

    // The process exited before any connection attempt.
    match listener.accept() {
        Err(e) if e.kind() == ErrorKind::WouldBlock => {}
        other => panic!("Expected no connection attempt, got {other:?}"),
    }
}

#[test]
fn missing_jwt_exits_nonzero() {
    let output = fxcoach()
        .env("OPENAI_API_KEY", "sk-test")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("required credential AGENT_JWT"),
        "stderr was: {stderr}"
    );
}

#[test]
fn session_init_failure_exits_nonzero_before_event_loop() {
    // Bind then drop to get an address nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = fxcoach()
        .env("OPENAI_API_KEY", "sk-test")
        .env("AGENT_JWT", "jwt-test")
        .env("FXCOACH_BROKER_URL", format!("ws://{addr}"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Failed to connect to broker"),
        "stderr was: {stderr}"
    );
}
