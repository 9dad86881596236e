use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("run.dag"),
        "JOB first sim.sub\nJOB second sim.sub\n\
         VARS first SEED=\"1\" OUT=\"one.dat\"\n\
         VARS second SEED=\"2\" OUT=\"two.dat\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("sim.sub"),
        "executable = ./simulate\narguments = '--seed $(SEED) -o $(OUT)'\nqueue\n",
    )
    .unwrap();
    dir
}

fn cmd(dir: &TempDir, subcommand: &str) -> Command {
    let mut cmd = Command::cargo_bin("condor-jobs").unwrap();
    cmd.arg(subcommand)
        .arg("--dag")
        .arg(dir.path().join("run.dag"))
        .arg("--sub")
        .arg(dir.path().join("sim.sub"));
    cmd
}

#[test]
fn prints_commands() {
    let dir = fixture();
    cmd(&dir, "commands").assert().success().stdout(
        "./simulate --seed 1 -o one.dat\n./simulate --seed 2 -o two.dat\n",
    );
}

#[test]
fn prints_jobs_and_vars() {
    let dir = fixture();
    cmd(&dir, "jobs").assert().success().stdout("first\nsecond\n");
    cmd(&dir, "vars")
        .assert()
        .success()
        .stdout("first SEED=1 OUT=one.dat\nsecond SEED=2 OUT=two.dat\n");
}

#[test]
fn json_commands_include_job_names() {
    let dir = fixture();
    let output = cmd(&dir, "commands").arg("--json").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["name"], "first");
    assert_eq!(parsed[1]["command"], "./simulate --seed 2 -o two.dat");
    assert_eq!(parsed[1]["variables"]["SEED"], "2");
}

#[test]
fn missing_sub_file_fails() {
    let dir = fixture();
    Command::cargo_bin("condor-jobs")
        .unwrap()
        .args(["args", "--dag"])
        .arg(dir.path().join("run.dag"))
        .arg("--sub")
        .arg(dir.path().join("absent.sub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.sub"));
}
