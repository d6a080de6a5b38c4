//! Parsing of yt-dlp's stdout and stderr.

use serde_json::Value;
use tubegrab_core::{FetchReport, FetchResult};

/// Collect the items yt-dlp reported on stdout.
///
/// A line holding a JSON object is the metadata of the item whose
/// filename follows it; every other non-empty line is a filename.
pub fn parse_report(stdout: &str) -> FetchReport {
    let mut report = FetchReport::default();
    let mut pending: Option<Value> = None;

    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match serde_json::from_str::<Value>(line) {
            Ok(value) if value.is_object() => pending = Some(value),
            _ => report.items.push(FetchResult::new(
                line,
                pending.take().unwrap_or(Value::Null),
            )),
        }
    }

    report
}

/// Reduce stderr to the failure message handed back to the caller.
///
/// yt-dlp prefixes fatal messages with `ERROR:`; those lines are kept as
/// is. Without any, the whole trimmed stderr is used.
pub fn extract_error(stderr: &str) -> Option<String> {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| l.starts_with("ERROR:"))
        .collect();

    if !errors.is_empty() {
        return Some(errors.join("\n"));
    }

    let trimmed = stderr.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn metadata_attaches_to_following_filename() {
        let stdout = concat!(
            "{\"id\": \"abc\", \"title\": \"Test\", \"ext\": \"webm\"}\n",
            "/tmp/tubegrab-1/Test.webm\n",
        );
        let report = parse_report(stdout);

        assert_eq!(report.len(), 1);
        let item = report.primary().unwrap();
        assert_eq!(item.reported_filename, PathBuf::from("/tmp/tubegrab-1/Test.webm"));
        assert_eq!(item.metadata["id"], "abc");
    }

    #[test]
    fn playlist_items_keep_order() {
        let stdout = "{\"id\":\"1\"}\nOne.webm\n\n{\"id\":\"2\"}\nTwo.webm\nThree.webm\n";
        let report = parse_report(stdout);

        let names: Vec<_> = report
            .items
            .iter()
            .map(|i| i.reported_filename.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["One.webm", "Two.webm", "Three.webm"]);
        assert_eq!(report.items[1].metadata["id"], "2");
        assert!(report.items[2].metadata.is_null());
    }

    #[test]
    fn numeric_title_is_a_filename_not_metadata() {
        let report = parse_report("1984\n");
        assert_eq!(report.primary().unwrap().reported_filename, PathBuf::from("1984"));
    }

    #[test]
    fn empty_stdout_reports_nothing() {
        assert!(parse_report("\n  \n").is_empty());
    }

    #[test]
    fn error_lines_are_kept_verbatim() {
        let stderr = "WARNING: something odd\nERROR: [generic] Unsupported URL: https://x\n";
        assert_eq!(
            extract_error(stderr).as_deref(),
            Some("ERROR: [generic] Unsupported URL: https://x")
        );
    }

    #[test]
    fn falls_back_to_whole_stderr() {
        assert_eq!(
            extract_error("  Traceback: boom \n").as_deref(),
            Some("Traceback: boom")
        );
        assert_eq!(extract_error(" \n"), None);
    }
}
