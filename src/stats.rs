//! Running usage counters per participant.
//!
//! [`ParticipantStats`] holds the totals and histograms for one participant
//! (or the global aggregate), and [`StatsRegistry`] owns one accumulator per
//! distinct sender plus the always-present global one. Counters only ever
//! increase during a parse run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reserved name for the aggregate over all participants.
pub const ALL_PARTICIPANTS: &str = "__ALL__";

/// Running totals and histograms for one participant.
///
/// The four histograms are fixed-size arrays indexed by weekday
/// (Monday = 0 .. Sunday = 6) or hour of day (0..=23).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Participant display name, or [`ALL_PARTICIPANTS`] for the aggregate.
    pub name: String,

    /// Total finalized messages from this participant.
    pub messages: u64,

    /// Total whitespace-delimited words across those messages.
    pub words: u64,

    /// Message count per weekday, Monday first.
    pub messages_per_weekday: [u64; 7],

    /// Message count per hour of day.
    pub messages_per_hour: [u64; 24],

    /// Word count per weekday, Monday first.
    pub words_per_weekday: [u64; 7],

    /// Word count per hour of day.
    pub words_per_hour: [u64; 24],
}

impl ParticipantStats {
    /// Creates a zero-filled accumulator for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: 0,
            words: 0,
            messages_per_weekday: [0; 7],
            messages_per_hour: [0; 24],
            words_per_weekday: [0; 7],
            words_per_hour: [0; 24],
        }
    }

    /// Records one finalized message.
    ///
    /// Increments the message count by 1 and the word count by `words`, and
    /// bumps exactly one weekday bucket and one hour bucket in each of the
    /// four histograms.
    ///
    /// # Panics
    ///
    /// Panics if `weekday > 6` or `hour > 23`; the timestamp decoder
    /// guarantees both bounds.
    pub fn record(&mut self, weekday: usize, hour: usize, words: u64) {
        self.messages += 1;
        self.messages_per_weekday[weekday] += 1;
        self.messages_per_hour[hour] += 1;
        self.words += words;
        self.words_per_weekday[weekday] += words;
        self.words_per_hour[hour] += words;
    }
}

/// Owns the global accumulator and one accumulator per distinct sender.
///
/// Participants are created lazily on their first message and keep their
/// first-encounter order, so descending sorts over them can tie-break
/// stably on that order.
#[derive(Debug, Clone)]
pub struct StatsRegistry {
    totals: ParticipantStats,
    participants: Vec<ParticipantStats>,
    index: HashMap<String, usize>,
}

impl StatsRegistry {
    /// Creates a registry with a zero-filled global accumulator.
    pub fn new() -> Self {
        Self {
            totals: ParticipantStats::new(ALL_PARTICIPANTS),
            participants: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Records one finalized message for `sender`, updating both the global
    /// accumulator and the sender's (created on first sight).
    pub fn record(&mut self, sender: &str, weekday: usize, hour: usize, words: u64) {
        self.totals.record(weekday, hour, words);

        let slot = *self.index.entry(sender.to_string()).or_insert_with(|| {
            self.participants.push(ParticipantStats::new(sender));
            self.participants.len() - 1
        });
        self.participants[slot].record(weekday, hour, words);
    }

    /// The aggregate over all participants.
    pub fn totals(&self) -> &ParticipantStats {
        &self.totals
    }

    /// Participants in first-encounter order.
    pub fn participants(&self) -> &[ParticipantStats] {
        &self.participants
    }

    /// Looks up one participant's accumulator by name.
    pub fn participant(&self, name: &str) -> Option<&ParticipantStats> {
        self.index.get(name).map(|&i| &self.participants[i])
    }

    /// Participants sorted descending by message count; ties keep
    /// first-encounter order (stable sort).
    pub fn participants_by_messages(&self) -> Vec<&ParticipantStats> {
        let mut ranked: Vec<&ParticipantStats> = self.participants.iter().collect();
        ranked.sort_by(|a, b| b.messages.cmp(&a.messages));
        ranked
    }
}

impl Default for StatsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
