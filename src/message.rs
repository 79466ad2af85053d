//! Message record reconstructed from an archive.
//!
//! [`Message`] is built up incrementally while the parser walks one message
//! boundary of the document: the user label fills in the sender, the meta
//! label the raw timestamp, each paragraph appends to the content, and each
//! reaction list item bumps the reaction count. Once the boundary closes the
//! record is read-only.
//!
//! # Example
//!
//! ```
//! use threadstats::Message;
//!
//! let msg = Message::new("Alice", "hello world\n", "Monday, January 1, 2024 at 10");
//! assert_eq!(msg.word_count(), 2);
//! assert_eq!(msg.reactions(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// One message reconstructed from the archive.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the message author |
/// | `content` | `String` | Newline-joined paragraph text |
/// | `timestamp_raw` | `String` | The meta label text, verbatim |
/// | `reactions` | `u32` | Number of reactions attached to the message |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Multi-paragraph messages keep one line per paragraph, each terminated
    /// by a newline, exactly as the paragraphs appeared in the archive.
    pub content: String,

    /// The raw timestamp text from the message header, e.g.
    /// `"Monday, January 1, 2024 at 10"`. Decoded lazily at finalization.
    pub timestamp_raw: String,

    /// Count of reactions attached to this message.
    ///
    /// Only the count is tracked, not reactor identity or reaction type.
    #[serde(default)]
    pub reactions: u32,
}

impl Message {
    /// Creates a message with no reactions.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp_raw: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp_raw: timestamp_raw.into(),
            reactions: 0,
        }
    }

    /// Builder method to set the reaction count.
    #[must_use]
    pub fn with_reactions(mut self, reactions: u32) -> Self {
        self.reactions = reactions;
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the raw timestamp text.
    pub fn timestamp_raw(&self) -> &str {
        &self.timestamp_raw
    }

    /// Returns the reaction count.
    pub fn reactions(&self) -> u32 {
        self.reactions
    }

    /// Number of whitespace-delimited tokens in the content.
    pub fn word_count(&self) -> u64 {
        self.content.split_whitespace().count() as u64
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
