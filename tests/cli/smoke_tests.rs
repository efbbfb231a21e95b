use predicates::prelude::*;

use crate::common::{TempWorkspace, bin};

#[test]
fn shows_help() {
    let ws = TempWorkspace::new();
    bin(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_words"))
        .stdout(predicate::str::contains("--chunk-size"));
}

#[test]
fn shows_version() {
    let ws = TempWorkspace::new();
    bin(&ws)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn counts_stdin_when_no_files_given() {
    let ws = TempWorkspace::new();
    bin(&ws)
        .arg("-p")
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("stdin;1;2;12\n");
}

#[test]
fn dash_reads_stdin() {
    let ws = TempWorkspace::new();
    bin(&ws)
        .args(["-p", "-"])
        .write_stdin("a b c")
        .assert()
        .success()
        .stdout("stdin;0;3;5\n");
}

#[test]
fn word_split_across_tiny_chunks_counts_once() {
    let ws = TempWorkspace::new();
    ws.create_file("split.txt", "ab cd");
    bin(&ws)
        .args(["-p", "-t", "4", "-m", "3", "split.txt"])
        .assert()
        .success()
        .stdout("split.txt;0;2;5\n");
}

#[test]
fn results_do_not_depend_on_threads_or_chunk_size() {
    let ws = TempWorkspace::new();
    let text = "alpha beta\tgamma\n  delta epsilon \n日本語 テキスト\u{3000}end".repeat(300);
    ws.create_file("big.txt", &text);
    let expected = format!(
        "big.txt;{};{};{}\n",
        text.matches('\n').count(),
        text.split_whitespace().count(),
        text.chars().count()
    );

    for (threads, chunk) in [("1", "1"), ("4", "7"), ("8", "4k"), ("2", "1m")] {
        bin(&ws)
            .args(["-p", "-m", threads, "-t", chunk, "big.txt"])
            .assert()
            .success()
            .stdout(expected.clone());
    }
}
