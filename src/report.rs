//! Flat text report rendering.
//!
//! Two artifacts are produced from a [`ChatReport`]: a digest of the
//! most-reacted-to messages and a statistics report with global and
//! per-participant totals and histograms. Rendering is pure string
//! building; writing is a thin I/O wrapper around it.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::parser::ChatReport;
use crate::stats::ParticipantStats;

/// Renders the most-reacted-to messages digest.
///
/// Messages are ordered descending by reaction count; ties keep the order
/// in which they appeared in the archive.
pub fn render_messages(report: &ChatReport) -> String {
    let mut out = String::from("Most reacted to messages:\n\n");
    for msg in report.reacted_ranked() {
        let _ = writeln!(out, "User: {}", msg.sender);
        let _ = writeln!(out, "Date: {}", msg.timestamp_raw);
        let _ = writeln!(out, "Content: {}\n", msg.content);
    }
    out
}

/// Renders the statistics report: global totals first, then one section per
/// participant, descending by message count.
pub fn render_stats(report: &ChatReport) -> String {
    let mut out = String::new();
    write_participant(&mut out, report.totals());

    out.push_str("__Statistics per participant__\n\n");
    for participant in report.stats.participants_by_messages() {
        let _ = writeln!(out, "__{}__", participant.name);
        write_participant(&mut out, participant);
    }
    out
}

fn write_participant(out: &mut String, stats: &ParticipantStats) {
    let _ = writeln!(out, "Total number of messages: {}", stats.messages);
    let _ = writeln!(out, "Total number of words: {}", stats.words);
    out.push_str("Total number of messages over a week (cumulative):\n");
    let _ = writeln!(out, "{}", format_histogram(&stats.messages_per_weekday));
    out.push_str("Total number of words over a week (cumulative):\n");
    let _ = writeln!(out, "{}", format_histogram(&stats.words_per_weekday));
    out.push_str("Total number of messages over a day (cumulative):\n");
    let _ = writeln!(out, "{}", format_histogram(&stats.messages_per_hour));
    out.push_str("Total number of words over a day (cumulative):\n");
    let _ = writeln!(out, "{}\n", format_histogram(&stats.words_per_hour));
}

/// Renders a histogram as literal array text: `[0, 1, 2]`.
fn format_histogram(buckets: &[u64]) -> String {
    let mut out = String::from("[");
    for (i, bucket) in buckets.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{bucket}");
    }
    out.push(']');
    out
}

/// Writes both reports to disk.
///
/// Output files are created (or truncated) only here, after the whole
/// archive parsed successfully, so a failed run leaves no partial output.
pub fn write_reports(report: &ChatReport, stats_path: &Path, messages_path: &Path) -> Result<()> {
    fs::write(stats_path, render_stats(report))?;
    fs::write(messages_path, render_messages(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn sample_report() -> ChatReport {
        let doc = "<div class=\"thread\">\
            <div class=\"message\"><div class=\"message_header\">\
            <span class=\"user\">Alice</span>\
            <span class=\"meta\">Monday, January 1, 2024 at 10</span>\
            </div></div><p>hello world</p><ul><li>r</li></ul>\
            <div class=\"message\"><div class=\"message_header\">\
            <span class=\"user\">Bob</span>\
            <span class=\"meta\">Tuesday, January 2, 2024 at 23</span>\
            </div></div><p>hi</p>\
            </div>";
        parse_str(doc).unwrap()
    }

    #[test]
    fn test_format_histogram() {
        assert_eq!(format_histogram(&[0, 1, 2]), "[0, 1, 2]");
        assert_eq!(format_histogram(&[]), "[]");
        assert_eq!(format_histogram(&[7]), "[7]");
    }

    #[test]
    fn test_render_messages_digest() {
        let rendered = render_messages(&sample_report());
        assert!(rendered.starts_with("Most reacted to messages:\n\n"));
        assert!(rendered.contains("User: Alice\n"));
        assert!(rendered.contains("Date: Monday, January 1, 2024 at 10\n"));
        assert!(rendered.contains("Content: hello world\n"));
        // Bob had no reactions and must not appear.
        assert!(!rendered.contains("Bob"));
    }

    #[test]
    fn test_render_messages_empty_ranking() {
        let report = parse_str("<div class=\"thread\"></div>").unwrap();
        assert_eq!(render_messages(&report), "Most reacted to messages:\n\n");
    }

    #[test]
    fn test_render_stats_global_section() {
        let rendered = render_stats(&sample_report());
        assert!(rendered.starts_with("Total number of messages: 2\n"));
        assert!(rendered.contains("Total number of words: 3\n"));
        assert!(rendered.contains("__Statistics per participant__\n"));
    }

    #[test]
    fn test_render_stats_participant_order() {
        let rendered = render_stats(&sample_report());
        // Both sent one message; ties keep encounter order.
        let alice = rendered.find("__Alice__").unwrap();
        let bob = rendered.find("__Bob__").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn test_render_stats_histogram_lines() {
        let rendered = render_stats(&sample_report());
        // Global weekday histogram: one message Monday, one Tuesday.
        assert!(rendered.contains("[1, 1, 0, 0, 0, 0, 0]"));
        // Global hour histogram has buckets 10 and 23 set.
        assert!(
            rendered.contains("[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]")
        );
    }

    #[test]
    fn test_write_reports() {
        let dir = tempfile::tempdir().unwrap();
        let stats_path = dir.path().join("stats.txt");
        let messages_path = dir.path().join("messages.txt");

        write_reports(&sample_report(), &stats_path, &messages_path).unwrap();

        let stats = fs::read_to_string(&stats_path).unwrap();
        let messages = fs::read_to_string(&messages_path).unwrap();
        assert!(stats.contains("Total number of messages: 2"));
        assert!(messages.starts_with("Most reacted to messages:"));
    }
}
