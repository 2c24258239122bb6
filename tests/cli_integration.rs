mod util;

use pretty_assertions::assert_eq;
use util::{hc_hex, wordlist};

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn test_cli_encode_string() {
    hc_hex()
        .args(["--string", "marquee:", "--encode"])
        .assert()
        .success()
        .stdout("$HEX[6d6172717565653a]\n");
}

#[test]
fn test_cli_decode_string_safe() {
    hc_hex()
        .args(["-s", "$HEX[262333393a313539373533]", "-d", "--safe"])
        .assert()
        .success()
        .stdout("&#39:159753\n");
}

#[test]
fn test_cli_decode_failure_exits_one_without_output() {
    let assert = hc_hex().args(["-s", "$HEX[ff]", "-d", "--fast"]).assert().failure().code(1);
    assert_eq!(stdout_of(&assert), "");
    assert_eq!(stderr_of(&assert), "");
}

#[test]
fn test_cli_ignore_turns_failure_into_success() {
    let assert = hc_hex().args(["-s", "$HEX[ff]", "-d", "--fast", "-i"]).assert().success();
    assert_eq!(stdout_of(&assert), "");
}

#[test]
fn test_cli_verbose_names_the_failure() {
    let assert = hc_hex().args(["-s", "$HEX[zz]", "-d", "--fast", "-v"]).assert().failure();
    let stderr = stderr_of(&assert);
    assert!(stderr.contains("InvalidHexDigit"), "stderr was: {}", stderr);
    assert!(stderr.contains("$HEX[zz]"), "stderr was: {}", stderr);
}

#[test]
fn test_cli_decode_requires_strategy() {
    hc_hex().args(["-s", "$HEX[41]", "-d"]).assert().failure().code(2);
}

#[test]
fn test_cli_rejects_conflicting_modes() {
    hc_hex().args(["-s", "x", "-e", "-d", "--fast"]).assert().failure().code(2);
}

#[test]
fn test_cli_file_keeps_going_past_bad_lines() {
    let file = wordlist(b"$HEX[70617373]\n$HEX[ff]\n$HEX[6162]\r\n");
    let assert = hc_hex()
        .arg("--file")
        .arg(file.path())
        .args(["--decode", "--fast"])
        .assert()
        .failure()
        .code(1);
    assert_eq!(stdout_of(&assert), "pass\nab\n");
}

#[test]
fn test_cli_file_with_ignore_succeeds() {
    let file = wordlist(b"$HEX[70617373]\nnot hex\n");
    let assert = hc_hex()
        .arg("-f")
        .arg(file.path())
        .args(["-d", "--safe", "--ignore"])
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), "pass\n");
}

#[test]
fn test_cli_file_encode() {
    let file = wordlist("marquee:\nпароль\n".as_bytes());
    let assert = hc_hex().arg("-f").arg(file.path()).arg("-e").assert().success();
    assert_eq!(stdout_of(&assert), "$HEX[6d6172717565653a]\n$HEX[d0bfd0b0d180d0bed0bbd18c]\n");
}

#[test]
fn test_cli_missing_file_is_fatal() {
    let assert = hc_hex()
        .args(["-f", "/nonexistent/wordlist.txt", "-e", "-i"])
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(&assert).contains("cannot open input file"));
}

#[test]
fn test_cli_threshold_from_config_file() {
    let config = wordlist(b"min_confidence = 0.25\n");
    hc_hex()
        .args(["-s", "$HEX[41]", "-d", "--safe", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn test_cli_invalid_threshold_is_fatal() {
    hc_hex()
        .args(["-s", "$HEX[41]", "-d", "--safe", "--min-confidence", "2"])
        .assert()
        .failure()
        .code(1);
}
