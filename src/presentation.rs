use crate::error::Result;
use count_words_engine::report::{FileReport, GLOBAL_NAME};
use count_words_engine::RunReport;
use count_words_shared_kernel::{Counts, Metrics, OutputMode};
use serde::Serialize;
use std::io::Write;

const NAME_WIDTH: usize = 24;
const COUNT_WIDTH: usize = 10;

/// Render `report` in the requested mode.
///
/// One row per file in input order, then the global row when more than one
/// file was reported.
///
/// # Errors
///
/// Propagates write and serialization failures.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    mode: OutputMode,
    metrics: Metrics,
) -> Result<()> {
    match mode {
        OutputMode::Human => write_human(out, report, metrics),
        OutputMode::Parseable => write_parseable(out, report),
        OutputMode::Json => write_json(out, report),
    }
}

fn rows(report: &RunReport) -> impl Iterator<Item = (&str, &Counts, bool)> {
    let global = report
        .shows_global()
        .then_some((GLOBAL_NAME, &report.global, report.files.iter().all(|f| f.complete)));
    report
        .files
        .iter()
        .map(|f| (f.name.as_str(), &f.counts, f.complete))
        .chain(global)
}

fn write_human<W: Write>(out: &mut W, report: &RunReport, metrics: Metrics) -> Result<()> {
    for (name, counts, complete) in rows(report) {
        write!(out, "file: {name:>NAME_WIDTH$}")?;
        if metrics.lines {
            write!(out, " lines: {:>COUNT_WIDTH$}", counts.lines)?;
        }
        if metrics.words {
            write!(out, " words: {:>COUNT_WIDTH$}", counts.words)?;
        }
        if metrics.chars {
            write!(out, " chars: {:>COUNT_WIDTH$}", counts.chars)?;
        }
        if !complete {
            write!(out, " (incomplete)")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_parseable<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    for (name, counts, _) in rows(report) {
        writeln!(out, "{name};{};{};{}", counts.lines, counts.words, counts.chars)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<&'a Counts>,
}

fn write_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    let doc = JsonReport {
        files: &report.files,
        total: report.shows_global().then_some(&report.global),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use count_words_shared_kernel::FileId;

    fn file(id: usize, name: &str, counts: Counts) -> FileReport {
        FileReport {
            id: FileId::new(id),
            name: name.to_string(),
            counts,
            complete: true,
        }
    }

    fn render(report: &RunReport, mode: OutputMode, metrics: Metrics) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, mode, metrics).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn two_files() -> RunReport {
        RunReport {
            files: vec![
                file(0, "a.txt", Counts::new(1, 2, 12)),
                file(1, "b.txt", Counts::new(3, 4, 5)),
            ],
            global: Counts::new(4, 6, 17),
            errors: Vec::new(),
        }
    }

    #[test]
    fn human_single_file_has_no_global_row() {
        let report = RunReport {
            files: vec![file(0, "hello.txt", Counts::new(1, 2, 12))],
            global: Counts::new(1, 2, 12),
            errors: Vec::new(),
        };
        let text = render(&report, OutputMode::Human, Metrics::ALL);
        assert_eq!(
            text,
            "file:                hello.txt lines:          1 words:          2 chars:         12\n"
        );
    }

    #[test]
    fn human_only_shows_enabled_metrics() {
        let metrics = Metrics {
            words: true,
            ..Metrics::NONE
        };
        let text = render(&two_files(), OutputMode::Human, metrics);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.contains("words:")));
        assert!(lines.iter().all(|l| !l.contains("lines:") && !l.contains("chars:")));
        assert!(lines[2].contains("global"));
        assert!(lines[2].ends_with("         6"));
    }

    #[test]
    fn human_marks_incomplete_files() {
        let mut report = two_files();
        report.files[1].complete = false;
        let text = render(&report, OutputMode::Human, Metrics::ALL);
        let lines: Vec<_> = text.lines().collect();
        assert!(!lines[0].ends_with("(incomplete)"));
        assert!(lines[1].ends_with("(incomplete)"));
        assert!(lines[2].ends_with("(incomplete)"));
    }

    #[test]
    fn parseable_always_has_three_columns() {
        let metrics = Metrics {
            lines: true,
            ..Metrics::NONE
        };
        let text = render(&two_files(), OutputMode::Parseable, metrics);
        assert_eq!(text, "a.txt;1;2;12\nb.txt;3;4;5\nglobal;4;6;17\n");
    }

    #[test]
    fn json_document() {
        let text = render(&two_files(), OutputMode::Json, Metrics::ALL);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["files"][0]["file"], "a.txt");
        assert_eq!(value["files"][0]["words"], 2);
        assert_eq!(value["files"][1]["complete"], true);
        assert_eq!(value["total"]["chars"], 17);
    }

    #[test]
    fn json_single_file_omits_total() {
        let report = RunReport {
            files: vec![file(0, "only", Counts::new(0, 0, 0))],
            global: Counts::ZERO,
            errors: Vec::new(),
        };
        let text = render(&report, OutputMode::Json, Metrics::ALL);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("total").is_none());
    }
}
