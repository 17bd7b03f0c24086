/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Config pointing lookups at a refused local port so no test touches the
/// network: every lookup fails fast into an Unknown finding.
const OFFLINE_CONFIG: &str = r#"
registry_url: "http://127.0.0.1:9"
lookup_timeout_secs: 1
storage_dir: artifacts
"#;

fn offline_workspace(requirements: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("req-audit.config.yml"), OFFLINE_CONFIG).unwrap();
    fs::write(temp_dir.path().join("requirements.txt"), requirements).unwrap();
    temp_dir
}

// Exit code tests for CLI
mod exit_code_tests {
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("req-audit").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("req-audit").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("req-audit")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("req-audit").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("req-audit")
            .args(["audit", "requirements.txt", "-f", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent requirements file
    #[test]
    fn test_exit_code_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("req-audit")
            .current_dir(temp_dir.path())
            .args(["audit", "does-not-exist.txt"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Requirements file not found"));
    }
}

#[test]
fn test_audit_writes_both_artifacts() {
    let temp_dir = offline_workspace("requests==2.0.0\nnotalib\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt"])
        .assert()
        .code(0);

    let artifacts = temp_dir.path().join("artifacts");
    assert!(artifacts.join("requirements.txt").exists());
    assert!(artifacts.join("requirements.txt.csv").exists());
    assert!(artifacts.join("requirements.txt.json").exists());

    let csv = fs::read_to_string(artifacts.join("requirements.txt.csv")).unwrap();
    assert!(csv.starts_with("Dependency,Category\n"));
    assert!(csv.contains("requests==2.0.0,Uploaded"));
}

#[test]
fn test_audit_denylisted_dependency_exit_code() {
    let temp_dir = offline_workspace("malware-lib==1.0\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("malware-lib"));
}

#[test]
fn test_audit_summary_output() {
    let temp_dir = offline_workspace("requests==2.0.0\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Dependency Audit Report"))
        .stdout(predicate::str::contains("## Uploaded Dependencies (1)"));
}

#[test]
fn test_audit_json_output_format() {
    let temp_dir = offline_workspace("requests==2.0.0\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt", "-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"filename\": \"requirements.txt\""))
        .stdout(predicate::str::contains("requests==2.0.0"));
}

#[test]
fn test_audit_output_to_file() {
    let temp_dir = offline_workspace("requests==2.0.0\n");
    let output_path = temp_dir.path().join("report.csv");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args([
            "audit",
            "requirements.txt",
            "-f",
            "csv",
            "-o",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .code(0);

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("Dependency,Category\n"));
}

#[test]
fn test_audit_custom_deny_flag_overrides_config() {
    let temp_dir = offline_workspace("internal-fork==1.0\nmalware-lib==1.0\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt", "-d", "internal-fork"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("internal-fork"));
}

#[test]
fn test_audit_unreachable_registry_reports_unknown() {
    let temp_dir = offline_workspace("requests==2.0.0\n");

    cargo_bin_cmd!("req-audit")
        .current_dir(temp_dir.path())
        .args(["audit", "requirements.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Unable to check version"));
}
