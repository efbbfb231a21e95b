use predicates::prelude::*;

use crate::common::{TempWorkspace, bin};

#[test]
fn human_output_single_file() {
    let ws = TempWorkspace::new();
    ws.create_file("hello.txt", "hello world\n");
    bin(&ws)
        .arg("hello.txt")
        .assert()
        .success()
        .stdout("file:                hello.txt lines:          1 words:          2 chars:         12\n");
}

#[test]
fn human_output_respects_metric_flags() {
    let ws = TempWorkspace::new();
    ws.create_file("hello.txt", "hello world\n");
    bin(&ws)
        .args(["-w", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("words:"))
        .stdout(predicate::str::contains("lines:").not())
        .stdout(predicate::str::contains("chars:").not());
}

#[test]
fn parseable_output_has_global_row_for_many_files() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "one two\n");
    ws.create_file("b.txt", "three\nfour five\n");
    bin(&ws)
        .args(["-p", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("a.txt;1;2;8\nb.txt;2;3;16\nglobal;3;5;24\n");
}

#[test]
fn parseable_output_keeps_chars_with_metric_subset() {
    let ws = TempWorkspace::new();
    ws.create_file("hello.txt", "hello world\n");
    bin(&ws)
        .args(["-p", "-l", "hello.txt"])
        .assert()
        .success()
        .stdout("hello.txt;1;0;12\n");
    bin(&ws)
        .args(["-p", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout("hello.txt;0;2;12\n");
}

#[test]
fn json_output_keeps_chars_with_metric_subset() {
    let ws = TempWorkspace::new();
    ws.create_file("hello.txt", "hello world\n");
    let output = bin(&ws)
        .args(["--json", "-w", "hello.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"][0]["lines"], 0);
    assert_eq!(value["files"][0]["words"], 2);
    assert_eq!(value["files"][0]["chars"], 12);
}

#[test]
fn parseable_output_keeps_input_order() {
    let ws = TempWorkspace::new();
    ws.create_file("z.txt", "z\n");
    ws.create_file("a.txt", "a\n");
    bin(&ws)
        .args(["-p", "z.txt", "a.txt"])
        .assert()
        .success()
        .stdout("z.txt;1;1;2\na.txt;1;1;2\nglobal;2;2;4\n");
}

#[test]
fn empty_file_counts_zero() {
    let ws = TempWorkspace::new();
    ws.create_file("empty.txt", "");
    bin(&ws)
        .args(["-p", "empty.txt"])
        .assert()
        .success()
        .stdout("empty.txt;0;0;0\n");
}

#[test]
fn json_output() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "one two\n");
    ws.create_file("b.txt", "three");
    let output = bin(&ws)
        .args(["--json", "a.txt", "b.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"][0]["file"], "a.txt");
    assert_eq!(value["files"][0]["words"], 2);
    assert_eq!(value["files"][1]["chars"], 5);
    assert_eq!(value["total"]["words"], 3);
}
