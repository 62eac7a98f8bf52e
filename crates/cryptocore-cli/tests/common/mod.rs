//! Shared harness for cryptocore CLI tests.
//!
//! Runs the compiled binary with a pinned environment so settings never leak
//! in from the host.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cryptocore"));
    cmd.args(args)
        .current_dir(dir)
        .env_remove("CRYPTOCORE_HASH_ALGORITHM")
        .env_remove("CRYPTOCORE_IDENTITY_FRAMING")
        .env_remove("RUST_LOG");
    cmd
}

fn collect(output: std::process::Output) -> CommandResult {
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run `cryptocore` in `dir` with the given arguments.
pub fn cryptocore(dir: &Path, args: &[&str]) -> CommandResult {
    collect(command(dir, args).output().expect("failed to run cryptocore"))
}

/// Run `cryptocore` with extra environment variables.
pub fn cryptocore_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> CommandResult {
    let mut cmd = command(dir, args);
    for (k, v) in env {
        cmd.env(k, v);
    }
    collect(cmd.output().expect("failed to run cryptocore"))
}

/// Run `cryptocore` feeding `input` on stdin.
pub fn cryptocore_stdin(dir: &Path, args: &[&str], input: &[u8]) -> CommandResult {
    let mut child = command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn cryptocore");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");
    collect(child.wait_with_output().expect("failed to wait for cryptocore"))
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) {
    std::fs::write(dir.join(name), contents).unwrap();
}
