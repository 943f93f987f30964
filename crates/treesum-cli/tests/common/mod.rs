//! Shared test harness for treesum-cli integration tests.
//!
//! Runs the compiled `treesum` binary with a pinned environment so that
//! user settings (`RUST_LOG`, `TREESUM_ALGORITHM`, `HOME`) never leak in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// ──────────────────────────── Types ────────────────────────────

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

// ──────────────────────────── Process Runners ────────────────────────────

/// Apply the pinned environment to a `Command`; `home` becomes `$HOME`.
fn pin_env(cmd: &mut Command, home: &Path) {
    cmd.env_remove("RUST_LOG")
        .env_remove("TREESUM_ALGORITHM")
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env("LC_ALL", "C");
}

/// Run treesum in `dir` (which also serves as `$HOME`).
pub fn treesum(dir: &Path, args: &[&str]) -> CommandResult {
    treesum_with_env(dir, args, &[])
}

/// Run treesum in `dir` with extra environment variables.
pub fn treesum_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treesum"));
    cmd.args(args).current_dir(dir);
    pin_env(&mut cmd, dir);
    for (key, value) in env {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("failed to run treesum");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

// ──────────────────────────── Fixtures ────────────────────────────

/// Create `folder/subfolder/{testfile.txt, empty_file.txt, emptysubfolder/}` under `root`.
pub fn reference_tree(root: &Path) -> PathBuf {
    let sub = root.join("folder").join("subfolder");
    fs::create_dir_all(sub.join("emptysubfolder")).unwrap();
    fs::write(sub.join("testfile.txt"), "Some textAnother line of text.").unwrap();
    fs::write(sub.join("empty_file.txt"), b"").unwrap();
    root.join("folder")
}

/// First whitespace-separated field of the first stdout line.
pub fn first_field(result: &CommandResult) -> &str {
    result
        .stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or("")
}
