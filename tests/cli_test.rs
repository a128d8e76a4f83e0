//! Exit codes and output streams of the hf-fetch binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";
const COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";

fn run_hf_fetch(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hf-fetch"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("HF_ENDPOINT")
        .env_remove("HF_REVISION")
        .output()
        .expect("failed to run hf-fetch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let temp = TempDir::new().unwrap();

    for args in [
        &["org/model", "weights.bin", "out.bin"][..],
        &["org/model", "weights.bin", "out.bin", "hf_xxx", "extra"][..],
        &["--help"][..],
    ] {
        let output = run_hf_fetch(temp.path(), args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(stdout(&output)
            .contains("Usage: hf-fetch <repo_id> <filename> <output_path> <token>"));
        // clap's explanation goes to stderr.
        assert!(stderr(&output).contains("error:"), "args: {:?}", args);
    }
    // Nothing was fetched, so no cache was created.
    assert!(!temp.path().join(".cache").exists());
}

#[test]
fn test_fetch_failure_reports_on_stderr() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("weights.bin");

    let output = run_hf_fetch(
        temp.path(),
        &[
            "org/model",
            "weights.bin",
            out.to_str().unwrap(),
            "hf_xxx",
            "--endpoint",
            UNREACHABLE_ENDPOINT,
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(!stdout(&output).contains("Downloaded to:"));
    assert!(!out.exists());
}

#[test]
fn test_cached_fetch_succeeds() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("weights.bin");
    let snapshot = temp
        .path()
        .join(".cache/models--org--model/snapshots")
        .join(COMMIT);
    fs::create_dir_all(&snapshot).unwrap();
    fs::write(snapshot.join("weights.bin"), b"cached weights").unwrap();
    fs::create_dir_all(temp.path().join(".cache/models--org--model/refs")).unwrap();
    fs::write(temp.path().join(".cache/models--org--model/refs/main"), COMMIT).unwrap();

    let output = run_hf_fetch(
        temp.path(),
        &[
            "org/model",
            "weights.bin",
            out.to_str().unwrap(),
            "hf_xxx",
            "--endpoint",
            UNREACHABLE_ENDPOINT,
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Downloaded to:"));
    assert_eq!(fs::read(&out).unwrap(), b"cached weights");
}
