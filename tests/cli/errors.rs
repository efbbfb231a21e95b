use predicates::prelude::*;

use crate::common::{TempWorkspace, bin};

#[test]
fn missing_file_is_skipped_and_fails_the_run() {
    let ws = TempWorkspace::new();
    ws.create_file("good.txt", "fine words\n");
    bin(&ws)
        .args(["-p", "missing.txt", "good.txt"])
        .assert()
        .code(1)
        .stdout("good.txt;1;2;11\n")
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn zero_threads_is_rejected() {
    let ws = TempWorkspace::new();
    bin(&ws)
        .args(["-m", "0"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let ws = TempWorkspace::new();
    bin(&ws).args(["-t", "0"]).write_stdin("x").assert().code(2);
}

#[test]
fn parseable_and_json_conflict() {
    let ws = TempWorkspace::new();
    bin(&ws).args(["-p", "--json"]).assert().code(2);
}

#[test]
fn directory_input_fails_the_run() {
    let ws = TempWorkspace::new();
    std::fs::create_dir(ws.path().join("subdir")).unwrap();
    bin(&ws)
        .args(["-p", "subdir"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("subdir"));
}
