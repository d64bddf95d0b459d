use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const AB_CD: &str = "C0000000001: a      b     \n\
                     X0000000001: 0x0061 0x0062\n\
                     C0000000002: c      d     \n\
                     X0000000002: 0x0063 0x0064\n";

#[test]
fn stdin_to_stdout() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.write_stdin("ab\ncd\n");
    cmd.assert().success().stdout(AB_CD);
}

#[test]
fn unterminated_last_line_is_not_printed() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.write_stdin("ab\ncd\nef");
    cmd.assert().success().stdout(AB_CD);
}

#[test]
fn file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "ab\r\ncd\r\n").unwrap();

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-input").arg(&input).arg("-output").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), AB_CD);
}

#[test]
fn overwrite_without_output_is_rejected_with_usage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "ab\n").unwrap();

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-input").arg(&input).arg("-overwrite");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("flag -overwrite is invalid without flag -output")
                .and(predicate::str::contains("Usage:")),
        );
}

#[test]
fn existing_output_requires_overwrite() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    fs::write(&output, "previous\n").unwrap();

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-output").arg(&output).write_stdin("ab\ncd\n");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot open output file"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-output")
        .arg(&output)
        .arg("-overwrite")
        .write_stdin("ab\ncd\n");
    cmd.assert().success();
    assert_eq!(fs::read_to_string(&output).unwrap(), AB_CD);
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-input")
        .arg(dir.path().join("missing.txt"))
        .arg("-output")
        .arg(&output);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot open input file"));
    assert!(!output.exists());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("--frobnicate");
    cmd.assert().code(2).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_flags() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("--help");
    cmd.assert().success().stdout(
        predicate::str::contains("--input")
            .and(predicate::str::contains("--output"))
            .and(predicate::str::contains("--overwrite")),
    );
}

#[test]
fn single_dash_help_prints_help() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("--output")));
}

#[cfg(unix)]
#[test]
fn non_utf8_file_names_are_accepted() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = tempdir().unwrap();
    let input = dir.path().join(OsString::from_vec(b"in\xFF.txt".to_vec()));
    let output = dir.path().join(OsString::from_vec(b"out\xFE.txt".to_vec()));
    fs::write(&input, "ab\ncd\n").unwrap();

    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.arg("-input").arg(&input).arg("-output").arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), AB_CD);
}

#[test]
fn truncated_sequence_prints_one_field_per_byte() {
    let mut cmd = cargo_bin_cmd!("charhex");
    cmd.write_stdin(&b"\xE2\x82\n"[..]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("X0000000001: 0xFFFD 0xFFFD\n"));
}
