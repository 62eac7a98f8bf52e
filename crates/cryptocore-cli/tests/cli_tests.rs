//! End-to-end tests for the cryptocore binary.

mod common;
use common::*;

const REFERENCE_ID: &str = "5c61dd534b7c89f55e6a73dda6efc4d150e9e7c478e902c461b904a4fde3dcd1";
const ROOT_123: &str = "dcd1c491e41ad1e6c2d34c2c2dda0799e7ab76a1048c189ba9b29b33daaffd1c";

fn repeat(c: char) -> String {
    c.to_string().repeat(64)
}

// ════════════════════════════════════════════════════════════════════════════
// hash-artifact
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn hash_artifact_with_json_metadata() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"test_file");

    let r = cryptocore(
        dir.path(),
        &["hash-artifact", "--metadata-json", r#"{ "name": "test" }"#, "artifact"],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim(), REFERENCE_ID);
}

#[test]
fn hash_artifact_with_metadata_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"test_file");
    write_file(dir.path(), "meta.json", br#"{"name":"test"}"#);

    let r = cryptocore(
        dir.path(),
        &["hash-artifact", "--metadata", "meta.json", "artifact"],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim(), REFERENCE_ID);
}

#[test]
fn hash_artifact_distinguishes_large_integers() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"x");

    let id_for = |json: &str| {
        let r = cryptocore(dir.path(), &["hash-artifact", "--metadata-json", json, "artifact"]);
        assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
        r.stdout.trim().to_string()
    };
    assert_ne!(
        id_for(r#"{"size":18446744073709551616}"#),
        id_for(r#"{"size":18446744073709551617}"#)
    );
}

#[test]
fn hash_artifact_rejects_empty_content() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "empty", b"");

    let r = cryptocore(dir.path(), &["hash-artifact", "empty"]);
    assert_eq!(r.exit_code, 128);
    assert!(r.stdout.is_empty());
    assert!(r.stderr.contains("invalid input"), "stderr: {}", r.stderr);
}

#[test]
fn hash_artifact_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let r = cryptocore(dir.path(), &["hash-artifact", "nope"]);
    assert_eq!(r.exit_code, 128);
    assert!(r.stderr.starts_with("fatal: cannot read 'nope'"), "stderr: {}", r.stderr);
}

#[test]
fn hash_artifact_honours_config_override() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"test_file");

    let r = cryptocore(
        dir.path(),
        &["-c", "hash.algorithm=sha512", "hash-artifact", "artifact"],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim().len(), 128);
}

#[test]
fn hash_artifact_honours_env_framing() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"test_file");
    let args = ["hash-artifact", "--metadata-json", r#"{"name":"test"}"#, "artifact"];

    let r = cryptocore_env(
        dir.path(),
        &args,
        &[("CRYPTOCORE_IDENTITY_FRAMING", "length-prefixed")],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim().len(), 64);
    assert_ne!(r.stdout.trim(), REFERENCE_ID);
}

#[test]
fn bad_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "artifact", b"x");
    let r = cryptocore(dir.path(), &["-c", "hash.algorithm=md5", "hash-artifact", "artifact"]);
    assert_eq!(r.exit_code, 128);
    assert!(r.stderr.contains("md5"), "stderr: {}", r.stderr);
}

// ════════════════════════════════════════════════════════════════════════════
// merkle-root
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn merkle_root_from_args() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b, c) = (repeat('1'), repeat('2'), repeat('3'));
    let r = cryptocore(dir.path(), &["merkle-root", &a, &b, &c]);
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout, format!("{ROOT_123}\n"));
}

#[test]
fn merkle_root_from_stdin_matches_args() {
    let dir = tempfile::tempdir().unwrap();
    let input = format!("{}\n\n{}\n{}\n", repeat('1'), repeat('2'), repeat('3'));
    let r = cryptocore_stdin(dir.path(), &["merkle-root", "--stdin"], input.as_bytes());
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim(), ROOT_123);
}

#[test]
fn merkle_root_levels() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = (repeat('1'), repeat('2'));
    let r = cryptocore(dir.path(), &["merkle-root", "--levels", &a, &b]);
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);

    let lines: Vec<&str> = r.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], format!("level 0: {a} {b}"));
    assert_eq!(lines[2], format!("level 1: {}", lines[0]));
}

#[test]
fn levels_help_describes_full_listing() {
    let dir = tempfile::tempdir().unwrap();
    for cmd in ["merkle-root", "identity-tree"] {
        let r = cryptocore(dir.path(), &[cmd, "--help"]);
        assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
        assert!(r.stdout.contains("Print every level, leaves first"), "stdout: {}", r.stdout);
        assert!(!r.stdout.contains("below the root"), "stdout: {}", r.stdout);
    }
}

#[test]
fn merkle_root_single_and_empty() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = repeat('a');

    let single = cryptocore(dir.path(), &["merkle-root", &leaf]);
    assert_eq!(single.stdout.trim(), leaf);

    let empty = cryptocore(dir.path(), &["merkle-root"]);
    assert_eq!(empty.exit_code, 0, "stderr: {}", empty.stderr);
    assert_eq!(empty.stdout, "\n");
}

// ════════════════════════════════════════════════════════════════════════════
// identity-tree
// ════════════════════════════════════════════════════════════════════════════

#[test]
fn identity_tree_lists_leaves_then_root() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "one", b"test_file");
    write_file(dir.path(), "two", b"another file");

    let r = cryptocore(
        dir.path(),
        &["identity-tree", "--metadata-json", r#"{"name":"test"}"#, "one", "two"],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);

    let lines: Vec<&str> = r.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("{REFERENCE_ID} one"));
    let second = lines[1].split(' ').next().unwrap();

    let root = cryptocore(dir.path(), &["merkle-root", REFERENCE_ID, second]);
    assert_eq!(lines[2], root.stdout.trim());
}

#[test]
fn identity_tree_fails_on_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "one", b"content");
    write_file(dir.path(), "empty", b"");

    let r = cryptocore(dir.path(), &["identity-tree", "one", "empty"]);
    assert_eq!(r.exit_code, 128);
    assert!(r.stderr.contains("cannot hash 'empty'"), "stderr: {}", r.stderr);
}

#[test]
fn identity_tree_requires_files() {
    let dir = tempfile::tempdir().unwrap();
    let r = cryptocore(dir.path(), &["identity-tree"]);
    assert_eq!(r.exit_code, 128);
}
