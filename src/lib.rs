//! # threadstats
//!
//! A Rust library and CLI for extracting per-participant usage statistics
//! from exported HTML conversation archives.
//!
//! ## Overview
//!
//! The archive is consumed in a single pass: a tag-state parser reconstructs
//! discrete message records (sender, body, timestamp, reaction count) from
//! the nested-tag stream and feeds them into running accumulators — message
//! and word totals plus per-weekday and per-hour histograms, globally and
//! per participant. Messages that collected reactions are kept aside and
//! ranked. Two flat text reports come out the other end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use threadstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let report = parse_file(Path::new("messages.htm"))?;
//!
//!     println!("{} messages total", report.totals().messages);
//!     for top in report.reacted_ranked().iter().take(3) {
//!         println!("{}: {} reactions", top.sender, top.reactions);
//!     }
//!
//!     write_reports(&report, Path::new("stats.txt"), Path::new("messages.txt"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the tag-state archive parser
//!   - [`ArchiveParser`](parser::ArchiveParser), [`ChatReport`](parser::ChatReport)
//!   - [`parse_str`](parser::parse_str), [`parse_file`](parser::parse_file)
//! - [`stats`] — per-participant accumulators
//!   - [`ParticipantStats`](stats::ParticipantStats), [`StatsRegistry`](stats::StatsRegistry)
//! - [`timestamp`] — archive timestamp decoding
//! - [`report`] — text report rendering and writing
//! - [`message`] — the [`Message`] record
//! - [`cli`] — CLI argument types
//! - [`error`] — unified error types ([`ThreadStatsError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod cli;
pub mod error;
pub mod message;
pub mod parser;
pub mod report;
pub mod stats;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{Result, ThreadStatsError};
pub use message::Message;
pub use parser::ChatReport;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use threadstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, ThreadStatsError};

    pub use crate::parser::{ArchiveParser, ChatReport, parse_file, parse_str};

    pub use crate::stats::{ALL_PARTICIPANTS, ParticipantStats, StatsRegistry};

    pub use crate::timestamp::{MessageTime, decode_timestamp};

    pub use crate::report::{render_messages, render_stats, write_reports};
}
