//! The append-only session transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Label used when rendering the transcript for display.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }
}

/// A single (speaker, text) pair in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only record of all exchanges in a session.
///
/// Entries are only ever added via [`Transcript::record_exchange`], which
/// appends a (User, Bot) pair in one call, so pairs are contiguous and in
/// submission order. Nothing is removed or reordered for the lifetime of
/// the session, and nothing is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed turn: the user's input followed by the bot's
    /// response.
    pub fn record_exchange(&mut self, user_text: impl Into<String>, bot_text: impl Into<String>) {
        let now = Utc::now();
        self.entries.push(TranscriptEntry {
            speaker: Speaker::User,
            text: user_text.into(),
            timestamp: now,
        });
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Bot,
            text: bot_text.into(),
            timestamp: now,
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
