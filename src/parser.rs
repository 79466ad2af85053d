//! Single-pass tag-state parser for HTML conversation archives.
//!
//! The archive is consumed as a stream of tag events. An explicit context
//! stack tracks which structural containers are currently open, so unmarked
//! nested containers or stray void elements cannot desynchronize the named
//! contexts the way independent "inside X" flags would.
//!
//! The vocabulary is the classic Facebook export layout:
//!
//! ```html
//! <div class="thread">
//!   <div class="message">
//!     <div class="message_header">
//!       <span class="user">Alice</span>
//!       <span class="meta">Monday, January 1, 2024 at 10</span>
//!     </div>
//!   </div>
//!   <p>hello world</p>
//!   <ul><li>reaction</li></ul>
//! </div>
//! ```
//!
//! A message record opens on its `message` container, collects its sender,
//! timestamp, paragraphs, and reactions from the following events, and is
//! finalized when the next message opens or the document ends. Finalizing
//! at end of document is deliberate: without it the last message of every
//! archive would go uncounted.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::Result;
use crate::message::Message;
use crate::stats::{ParticipantStats, StatsRegistry};
use crate::timestamp::decode_timestamp;

/// Structural context a tag can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// `div class="thread"` — the conversation container.
    Thread,
    /// `div class="message"` — one message boundary.
    Message,
    /// `div class="message_header"` — sender and timestamp labels.
    MessageHeader,
    /// `span class="user"` inside a header.
    UserLabel,
    /// `span class="meta"` inside a header.
    MetaLabel,
    /// `ul` inside the thread — reactions attached to the current message.
    ReactionList,
    /// `li` inside a reaction list — one reaction.
    ReactionItem,
    /// `p` inside the thread — one paragraph of message body.
    Paragraph,
    /// Any other tag. Tracked only to keep open/close events balanced.
    Other,
}

/// One open tag on the context stack.
#[derive(Debug)]
struct Frame {
    tag: Vec<u8>,
    context: Context,
}

/// Everything one parse run produces.
#[derive(Debug, Clone)]
pub struct ChatReport {
    /// Global and per-participant accumulators.
    pub stats: StatsRegistry,

    /// Messages that received at least one reaction, in encounter order.
    pub reacted: Vec<Message>,
}

impl ChatReport {
    /// The aggregate accumulator over all participants.
    pub fn totals(&self) -> &ParticipantStats {
        self.stats.totals()
    }

    /// Reacted-to messages sorted descending by reaction count; ties keep
    /// encounter order (stable sort).
    pub fn reacted_ranked(&self) -> Vec<&Message> {
        let mut ranked: Vec<&Message> = self.reacted.iter().collect();
        ranked.sort_by(|a, b| b.reactions.cmp(&a.reactions));
        ranked
    }
}

/// Streaming parser state for one archive document.
#[derive(Debug)]
pub struct ArchiveParser {
    stack: Vec<Frame>,
    pending: Option<Message>,
    stats: StatsRegistry,
    reacted: Vec<Message>,
}

impl ArchiveParser {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            pending: None,
            stats: StatsRegistry::new(),
            reacted: Vec::new(),
        }
    }

    /// Parses a whole archive document held in memory.
    pub fn parse_str(mut self, document: &str) -> Result<ChatReport> {
        let mut reader = Reader::from_str(document);
        // Archive HTML is not strict XML: tolerate unclosed void elements
        // and mismatched end names; the frame stack resynchronizes on them.
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        loop {
            match reader.read_event()? {
                Event::Start(node) => self.handle_open(&node)?,
                Event::End(node) => self.handle_close(node.name().as_ref()),
                Event::Text(text) => self.handle_text(&String::from_utf8_lossy(&text)),
                Event::Eof => break,
                // Self-closing elements (<br/>, <img/>) open no context.
                _ => {}
            }
        }

        // The last message has no following boundary to trigger it.
        self.finalize_pending()?;

        Ok(ChatReport {
            stats: self.stats,
            reacted: self.reacted,
        })
    }

    /// Reads and parses an archive file.
    pub fn parse_file(self, path: &Path) -> Result<ChatReport> {
        let document = fs::read_to_string(path)?;
        self.parse_str(&document)
    }

    fn in_context(&self, context: Context) -> bool {
        self.stack.iter().any(|frame| frame.context == context)
    }

    fn classify(&self, tag: &[u8], node: &BytesStart) -> Context {
        match tag {
            b"div" => {
                if has_class(node, b"thread") {
                    Context::Thread
                } else if self.in_context(Context::Thread) && has_class(node, b"message") {
                    Context::Message
                } else if self.in_context(Context::Message) && has_class(node, b"message_header") {
                    Context::MessageHeader
                } else {
                    Context::Other
                }
            }
            b"span" if self.in_context(Context::MessageHeader) => {
                if has_class(node, b"user") {
                    Context::UserLabel
                } else if has_class(node, b"meta") {
                    Context::MetaLabel
                } else {
                    Context::Other
                }
            }
            b"ul" if self.in_context(Context::Thread) => Context::ReactionList,
            b"li" if self.in_context(Context::ReactionList) => Context::ReactionItem,
            b"p" if self.in_context(Context::Thread) => Context::Paragraph,
            _ => Context::Other,
        }
    }

    fn handle_open(&mut self, node: &BytesStart) -> Result<()> {
        let tag = node.name().as_ref().to_vec();
        let context = self.classify(&tag, node);

        if context == Context::Message {
            // Finalizing the previous record can fail on a bad timestamp;
            // the new boundary is only opened once it succeeds.
            self.finalize_pending()?;
            self.pending = Some(Message::default());
        }

        self.stack.push(Frame { tag, context });
        Ok(())
    }

    fn handle_close(&mut self, tag: &[u8]) {
        // Pop back to the matching open tag. Frames above it belong to void
        // elements the document never closed.
        let Some(matching) = self.stack.iter().rposition(|frame| frame.tag == tag) else {
            return;
        };

        let reactions = self
            .stack
            .drain(matching..)
            .filter(|frame| frame.context == Context::ReactionItem)
            .count() as u32;
        if reactions > 0 {
            if let Some(message) = self.pending.as_mut() {
                message.reactions += reactions;
            }
        }
    }

    fn handle_text(&mut self, text: &str) {
        // Innermost label wins; everything outside the three text-bearing
        // contexts is layout noise.
        let target = self
            .stack
            .iter()
            .rev()
            .map(|frame| frame.context)
            .find(|context| {
                matches!(
                    context,
                    Context::UserLabel | Context::MetaLabel | Context::Paragraph
                )
            });

        let Some(message) = self.pending.as_mut() else {
            return;
        };
        match target {
            Some(Context::UserLabel) => message.sender = text.to_string(),
            Some(Context::MetaLabel) => message.timestamp_raw = text.to_string(),
            Some(Context::Paragraph) => {
                message.content.push_str(text);
                message.content.push('\n');
            }
            _ => {}
        }
    }

    fn finalize_pending(&mut self) -> Result<()> {
        let Some(message) = self.pending.take() else {
            return Ok(());
        };

        let time = decode_timestamp(&message.timestamp_raw)?;
        let words = message.word_count();
        self.stats.record(
            &message.sender,
            time.weekday_index(),
            time.hour as usize,
            words,
        );

        if message.reactions > 0 {
            self.reacted.push(message);
        }
        Ok(())
    }
}

impl Default for ArchiveParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an archive document held in memory.
pub fn parse_str(document: &str) -> Result<ChatReport> {
    ArchiveParser::new().parse_str(document)
}

/// Reads and parses an archive file.
pub fn parse_file(path: &Path) -> Result<ChatReport> {
    ArchiveParser::new().parse_file(path)
}

fn has_class(node: &BytesStart, class: &[u8]) -> bool {
    node.attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"class" && attr.value.as_ref() == class)
}
