//! Integration tests for the avtool CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive password prompts are hard to automate, so every test
//! passes the password via `--password` or `--vault-password-file`.

use std::fs;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the avtool binary.
///
/// `AVTOOL_PASSWORD` is cleared so a developer's environment cannot
/// leak into the tests.
fn avtool() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("avtool").expect("binary should exist");
    cmd.env_remove("AVTOOL_PASSWORD");
    cmd
}

/// Helper: write a plaintext file and encrypt it in place.
fn encrypted_fixture(dir: &TempDir, contents: &str, password: &str) -> std::path::PathBuf {
    let path = dir.path().join("secrets.yml");
    fs::write(&path, contents).unwrap();

    avtool()
        .args(["encrypt", path.to_str().unwrap(), "--password", password])
        .assert()
        .success();

    path
}

#[test]
fn help_flag_shows_usage() {
    avtool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool for working with Ansible Vault files"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("encrypt"));
}

#[test]
fn version_flag_shows_version() {
    avtool()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("avtool"));
}

#[test]
fn no_args_shows_help() {
    avtool()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn encrypt_then_view_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "db_password: hunter2\n", "testpass");

    // The file on disk is now a vault container.
    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.starts_with("$ANSIBLE_VAULT;1.1;AES256\n"));
    assert!(on_disk.ends_with('\n'));

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--key",
            "db_password",
            "--password",
            "testpass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn view_lists_keys_by_default() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: 1\nbeta: 2\n", "testpass");

    avtool()
        .args(["view", path.to_str().unwrap(), "--password", "testpass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 key(s)"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn view_all_shows_keys_and_values() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\nbeta: two\n", "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--key",
            "all",
            "--password",
            "testpass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("two"));
}

#[test]
fn view_dot_prints_whole_document() {
    let tmp = TempDir::new().unwrap();
    let doc = "alpha: one\nbeta: two\n";
    let path = encrypted_fixture(&tmp, doc, "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--key",
            ".",
            "--password",
            "testpass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(doc));
}

#[test]
fn view_missing_key_fails() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--key",
            "gamma",
            "--password",
            "testpass",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gamma"));
}

#[test]
fn view_aligned_output_pads_with_dot_leaders() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--password",
            "testpass",
            "--output",
            "aligned",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(".... 1 key(s)"));
}

#[test]
fn unknown_output_format_fails() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--password",
            "testpass",
            "--output",
            "fancy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn wrong_password_fails_with_auth_error() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "rightpass");

    avtool()
        .args(["view", path.to_str().unwrap(), "--password", "wrongpass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HMAC verification failed"));
}

#[test]
fn password_file_is_read_and_trimmed() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "filepass");

    // Trailing newline must be trimmed off.
    let pw_file = tmp.path().join("vault_pass.txt");
    fs::write(&pw_file, "filepass\n").unwrap();

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--vault-password-file",
            pw_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[test]
fn missing_password_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "testpass");

    avtool()
        .args([
            "view",
            path.to_str().unwrap(),
            "--vault-password-file",
            tmp.path().join("nope.txt").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn password_env_var_is_used() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "envpass");

    avtool()
        .args(["view", path.to_str().unwrap()])
        .env("AVTOOL_PASSWORD", "envpass")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[test]
fn encrypt_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    avtool()
        .args([
            "encrypt",
            tmp.path().join("absent.yml").to_str().unwrap(),
            "--password",
            "testpass",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn encrypt_directory_fails() {
    let tmp = TempDir::new().unwrap();

    avtool()
        .args([
            "encrypt",
            tmp.path().to_str().unwrap(),
            "--password",
            "testpass",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory"));
}

#[test]
fn view_garbage_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("garbage.yml");
    fs::write(&path, "this is not a vault\n").unwrap();

    avtool()
        .args(["view", path.to_str().unwrap(), "--password", "testpass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed vault header"));
}

#[test]
fn view_empty_plaintext_reports_empty() {
    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "", "testpass");

    avtool()
        .args(["view", path.to_str().unwrap(), "--password", "testpass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is empty!"));
}

#[cfg(unix)]
#[test]
fn encrypted_file_has_owner_only_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let path = encrypted_fixture(&tmp, "alpha: one\n", "testpass");

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600, "vault file should be 0o600");
}

#[test]
fn completions_bash_prints_script() {
    avtool()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("avtool"));
}

#[test]
fn completions_unknown_shell_fails() {
    avtool()
        .args(["completions", "csh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}
