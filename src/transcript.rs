//! In-memory chat transcript for the presentation layer.
//!
//! The session manager does no local bookkeeping; rendering state lives
//! here. A [`Transcript`] holds the message bubbles for the lifetime of the
//! process and the busy flag callers use to keep a single send in flight.

use serde::Serialize;
use time::OffsetDateTime;

use crate::types::Role;

/// One chat bubble. Immutable once pushed.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptMessage {
    /// Opaque identifier, unique within the transcript.
    pub id: String,

    /// Who authored the bubble.
    pub role: Role,

    /// The bubble text.
    pub text: String,

    /// Base64 payload of an attached upload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Creation time, epoch milliseconds.
    pub timestamp_ms: i64,

    /// True for the error variant of a model bubble.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// The ephemeral message history plus the single-in-flight busy flag.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<TranscriptMessage>,
    busy: bool,
    next_id: u64,
}

fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages pushed so far, oldest first.
    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    /// True while a send is outstanding; callers must not submit another.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Set or clear the busy flag.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Append a user bubble, optionally carrying an uploaded image payload.
    pub fn push_user(&mut self, text: impl Into<String>, image: Option<String>) {
        self.push(Role::User, text.into(), image, false);
    }

    /// Append a model bubble.
    pub fn push_model(&mut self, text: impl Into<String>) {
        self.push(Role::Model, text.into(), None, false);
    }

    /// Append an error-flagged model bubble.
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(Role::Model, text.into(), None, true);
    }

    /// Drop every message. The next conversation starts clean.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, role: Role, text: String, image: Option<String>, is_error: bool) {
        self.next_id += 1;
        self.messages.push(TranscriptMessage {
            id: self.next_id.to_string(),
            role,
            text,
            image,
            timestamp_ms: now_ms(),
            is_error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut transcript = Transcript::new();
        transcript.push_user("Analyze this room and give me organization tips.", None);
        transcript.push_model("Here are 3 tips...");
        transcript.push_user("What about the shelves?", None);

        let ids: Vec<&str> = transcript.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(transcript.messages()[0].timestamp_ms <= transcript.messages()[1].timestamp_ms);
    }

    #[test]
    fn error_bubble_is_flagged() {
        let mut transcript = Transcript::new();
        transcript.push_error("Sorry, something went wrong. Please check your connection or try again.");

        let messages = transcript.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_error);
        assert_eq!(messages[0].role, Role::Model);
    }

    #[test]
    fn busy_flag_round_trip() {
        let mut transcript = Transcript::new();
        assert!(!transcript.is_busy());
        transcript.set_busy(true);
        assert!(transcript.is_busy());
        transcript.set_busy(false);
        assert!(!transcript.is_busy());
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let mut transcript = Transcript::new();
        transcript.push_model("All tidy!");
        let json = serde_json::to_value(&transcript.messages()[0]).unwrap();
        assert!(json.get("image").is_none());
        assert!(json.get("is_error").is_none());
    }
}
