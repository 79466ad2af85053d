//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Extract per-participant usage statistics from an HTML conversation
/// archive into two flat text reports.
#[derive(Parser, Debug, Clone)]
#[command(name = "threadstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    threadstats messages.htm
    threadstats messages.htm my_stats.txt
    threadstats messages.htm my_stats.txt my_digest.txt")]
pub struct Args {
    /// Path to the exported archive document
    pub input: PathBuf,

    /// Path for the statistics report
    #[arg(default_value = "stats.txt")]
    pub stats_output: PathBuf,

    /// Path for the most-reacted messages digest
    #[arg(default_value = "messages.txt")]
    pub messages_output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["threadstats", "archive.htm"]);
        assert_eq!(args.input, PathBuf::from("archive.htm"));
        assert_eq!(args.stats_output, PathBuf::from("stats.txt"));
        assert_eq!(args.messages_output, PathBuf::from("messages.txt"));
    }

    #[test]
    fn test_explicit_outputs() {
        let args = Args::parse_from(["threadstats", "archive.htm", "s.txt", "m.txt"]);
        assert_eq!(args.stats_output, PathBuf::from("s.txt"));
        assert_eq!(args.messages_output, PathBuf::from("m.txt"));
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["threadstats"]).is_err());
    }
}
