use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("visit 41 position(s)"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_laboratory.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_laboratory.txt"));
}
