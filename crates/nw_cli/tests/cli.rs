//! End-to-end tests for the `nw` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn nw() -> Command {
    let mut cmd = Command::cargo_bin("nw").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_positional_numbers_in_order() {
    nw().args(["0", "-5", "142"])
        .assert()
        .success()
        .stdout("zero\nminus five\none hundred forty-two\n");
}

#[test]
fn ordinal_and_digit_forms() {
    nw().args(["--ordinal", "42", "100"])
        .assert()
        .success()
        .stdout("forty-second\none hundredth\n");

    nw().args(["--digits", "1", "12", "23"])
        .assert()
        .success()
        .stdout("1st\n12th\n23rd\n");
}

#[test]
fn legacy_turns_commas_on() {
    nw().args(["1234"])
        .assert()
        .success()
        .stdout("one thousand two hundred thirty-four\n");

    nw().args(["--legacy", "1234"])
        .assert()
        .success()
        .stdout("one thousand, two hundred thirty-four\n");
}

#[test]
fn reads_stdin_when_no_numbers_given() {
    nw().arg("--commas")
        .write_stdin("1000\n\n  1000001\n")
        .assert()
        .success()
        .stdout("one thousand\none million, one\n");
}

#[test]
fn failed_inputs_set_exit_code_but_do_not_stop_the_run() {
    nw().args(["abc", "7", "9007199254740993"])
        .assert()
        .code(3)
        .stdout("seven\n")
        .stderr(predicate::str::contains("not a finite number: abc"))
        .stderr(predicate::str::contains("not a safe number"));
}

#[test]
fn quiet_suppresses_error_lines() {
    nw().args(["--quiet", "abc"])
        .assert()
        .code(3)
        .stdout("")
        .stderr("");
}

#[cfg(feature = "report-json")]
#[test]
fn json_records() {
    nw().args(["--json", "12", "abc"])
        .assert()
        .code(3)
        .stdout(
            "{\"input\":\"12\",\"output\":\"twelve\"}\n\
             {\"input\":\"abc\",\"error\":{\"kind\":\"type\",\"message\":\"not a finite number: abc\"}}\n",
        );
}

#[test]
fn options_file_then_flags() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"useCommas": true, "negativePrefix": "negative"}}"#).unwrap();
    let path = f.path().to_str().unwrap().to_string();

    nw().args(["--options", path.as_str(), "-1001"])
        .assert()
        .success()
        .stdout("negative one thousand, one\n");

    nw().args(["--options", path.as_str(), "--negative-prefix", "less", "-3"])
        .assert()
        .success()
        .stdout("less three\n");
}

#[test]
fn bad_arguments_exit_with_validation_code() {
    nw().args(["--ordinal", "--digits", "1"]).assert().code(2);
    nw().args(["--options", "https://example.com/o.json", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no scheme"));

    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "not json").unwrap();
    nw().args(["--options", f.path().to_str().unwrap(), "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid options file"));
}

#[test]
fn unknown_flag_reports_one_error_prefix() {
    nw().arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("nw: error: unexpected argument '--bogus'"))
        .stderr(predicate::str::contains("error: error:").not());
}
