use assert_cmd::Command;
use predicates::prelude::*;

fn numwords() -> Command {
    Command::cargo_bin("numwords").unwrap()
}

#[test]
fn test_converts_decimal() {
    numwords()
        .arg("213.412")
        .assert()
        .success()
        .stdout("213.412: two hundred and thirteen point four one two\n");
}

#[test]
fn test_converts_negative() {
    numwords()
        .arg("-42")
        .assert()
        .success()
        .stdout("-42: negative forty-two\n");
}

#[test]
fn test_converts_negative_fraction_without_integer_part() {
    numwords()
        .arg("-.5")
        .assert()
        .success()
        .stdout("-.5: negative zero point five\n");
}

#[test]
fn test_style_flags() {
    numwords()
        .args(["--no-and", "--commas", "--minus", "-1200.5"])
        .assert()
        .success()
        .stdout("-1200.5: minus one thousand, two hundred point five\n");
}

#[test]
fn test_max_number() {
    numwords()
        .arg("--max")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}: ", "9".repeat(102))))
        .stdout(predicate::str::contains("duotrigintillion"));
}

#[test]
fn test_random_number() {
    numwords()
        .args(["--max-digits", "6", "--max-decimals", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[1-9][0-9]{0,5}(\.[1-9][0-9]{0,2})?: [a-z ,-]+\n$").unwrap());
}

#[test]
fn test_malformed_input_fails() {
    numwords()
        .arg("12.3.4")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("more than one decimal point"));

    numwords()
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed number 'abc'"));

    numwords()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn test_overflow_fails() {
    numwords()
        .arg(format!("1{}", "0".repeat(102)))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Number too large"));
}

#[test]
fn test_invalid_config_fails() {
    numwords()
        .args(["--max-digits", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_log_filter_from_environment() {
    numwords()
        .env("NUMWORDS_LOG", "debug")
        .arg("7")
        .assert()
        .success()
        .stdout("7: seven\n")
        .stderr(predicate::str::contains("Converting input: 7"));
}

#[test]
fn test_quiet_by_default() {
    numwords()
        .env_remove("NUMWORDS_LOG")
        .arg("7")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
