//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_modelpick");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("MODELPICK_BACKEND_URL");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("modelpick") || stdout.contains("model"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("modelpick"));
}

#[test]
fn cli_models_with_unreachable_backend_exits_with_error() {
    // Run from temp dir so dotenv() won't load .env from project root.
    // Port 9 (discard) should refuse the connection immediately.
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["models", "-b", "http://127.0.0.1:9"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure for unreachable backend"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr: {}", stderr);
}

#[test]
fn cli_empty_backend_url_is_rejected() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["config", "-b", ""])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("backend URL is empty"), "stderr: {}", stderr);
}
