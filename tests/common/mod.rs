// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

/// Environment variables the binary reads; cleared so the developer's own
/// settings never leak into a test run.
const INHERITED_ENV: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_ORG_ID",
    "AI_PERMISSION_EVALUATOR_LOG",
];

/// Base URL nothing listens on; any request to it fails to connect.
pub const UNREACHABLE_API_BASE: &str = "http://127.0.0.1:9/v1";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_ai-permission-evaluator"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Output of one binary invocation.
pub struct HookRun {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run `hook` with no API key and an unreachable endpoint.
pub fn run_hook(stdin_input: &str) -> HookRun {
    run_binary(&["hook", "--api-base", UNREACHABLE_API_BASE], &[], stdin_input)
}

/// Run `hook` against `api_base` with a test API key.
pub fn run_hook_against(stdin_input: &str, api_base: &str, extra_args: &[&str]) -> HookRun {
    let mut args = vec!["hook", "--api-base", api_base];
    args.extend_from_slice(extra_args);
    run_binary(&args, &[("OPENAI_API_KEY", "test-key")], stdin_input)
}

/// Write `config_content` to a temp file. Keep the handle alive while the
/// binary runs.
pub fn write_config(config_content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp config");
    tmpfile
        .write_all(config_content.as_bytes())
        .expect("failed to write config");
    tmpfile
}

/// Runs the binary with the given args, env and stdin.
pub fn run_binary(args: &[&str], envs: &[(&str, &str)], stdin_input: &str) -> HookRun {
    let mut cmd = Command::new(binary_path());
    cmd.args(args);
    for var in INHERITED_ENV {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::ErrorKind;
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    HookRun {
        stdout: String::from_utf8(output.stdout).expect("stdout not valid UTF-8"),
        stderr: String::from_utf8(output.stderr).expect("stderr not valid UTF-8"),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

pub fn make_input_json(tool_name: &str, tool_input: serde_json::Value) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": "/tmp/test",
        "permission_mode": "default",
        "hook_event_name": "PreToolUse",
        "tool_name": tool_name,
        "tool_input": tool_input,
        "tool_use_id": "toolu_e2e"
    })
    .to_string()
}

pub fn bash_input_json(command: &str) -> String {
    make_input_json("Bash", serde_json::json!({"command": command}))
}

/// Parses the hook output JSON.
pub fn parse_hook_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}

pub fn decision_of(stdout: &str) -> String {
    parse_hook_output(stdout)["hookSpecificOutput"]["permissionDecision"]
        .as_str()
        .expect("missing permissionDecision")
        .to_string()
}

pub fn reason_of(stdout: &str) -> String {
    parse_hook_output(stdout)["hookSpecificOutput"]["permissionDecisionReason"]
        .as_str()
        .expect("missing permissionDecisionReason")
        .to_string()
}

/// A chat-completions response whose message content is `content`.
pub fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
