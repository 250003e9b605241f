//! Inbound event decoding.
//!
//! Each text frame carries one JSON object tagged by `type`. Frames are
//! decoded once here; everything downstream matches on [`FeedEvent`].

use serde::Deserialize;
use thiserror::Error;

/// One dashboard notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A bot posted a chat message.
    Message {
        bot: String,
        content: String,
        conversation_type: String,
    },

    /// Two bots started a conversation.
    ConversationStart { initiator: String, responder: String },

    /// A grading run finished.
    GradingComplete { run_id: RunId, count: u64 },

    /// Any other tag the server broadcasts (`bot_added`, `conversation_end`, ...).
    #[serde(other)]
    Unrecognized,
}

impl FeedEvent {
    /// Label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedEvent::Message { .. } => "message",
            FeedEvent::ConversationStart { .. } => "conversation_start",
            FeedEvent::GradingComplete { .. } => "grading_complete",
            FeedEvent::Unrecognized => "unrecognized",
        }
    }
}

/// Grading run identifier; the server sends database ids as integers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RunId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunId::Number(n) => write!(f, "{}", n),
            RunId::Text(s) => f.write_str(s),
        }
    }
}

/// A frame that could not be decoded into a [`FeedEvent`].
#[derive(Debug, Error)]
#[error("malformed event frame: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decode one text frame.
pub fn decode_frame(text: &str) -> Result<FeedEvent, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_message() {
        let event = decode_frame(
            r#"{"type":"message","bot":"Alpha","content":"hello","conversation_type":"bot-bot"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            FeedEvent::Message {
                bot: "Alpha".into(),
                content: "hello".into(),
                conversation_type: "bot-bot".into(),
            }
        );
        assert_eq!(event.kind(), "message");
    }

    #[test]
    fn decodes_conversation_start() {
        let event =
            decode_frame(r#"{"type":"conversation_start","initiator":"A","responder":"B"}"#)
                .unwrap();
        assert_eq!(
            event,
            FeedEvent::ConversationStart {
                initiator: "A".into(),
                responder: "B".into(),
            }
        );
    }

    #[test]
    fn grading_run_id_accepts_number_or_string() {
        let numeric = decode_frame(r#"{"type":"grading_complete","run_id":42,"count":7}"#).unwrap();
        assert_eq!(
            numeric,
            FeedEvent::GradingComplete {
                run_id: RunId::Number(42),
                count: 7,
            }
        );

        let text =
            decode_frame(r#"{"type":"grading_complete","run_id":"r-9","count":0}"#).unwrap();
        match text {
            FeedEvent::GradingComplete { run_id, .. } => assert_eq!(run_id.to_string(), "r-9"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn unknown_tags_are_unrecognized() {
        let event = decode_frame(r#"{"type":"conversation_end","conversation_id":3}"#).unwrap();
        assert_eq!(event, FeedEvent::Unrecognized);

        let event = decode_frame(r#"{"type":"bot_added","bot":{"name":"x"}}"#).unwrap();
        assert_eq!(event, FeedEvent::Unrecognized);
    }

    #[test]
    fn malformed_frames_fail() {
        assert!(decode_frame("not json").is_err());
        assert!(decode_frame(r#"{"bot":"no tag"}"#).is_err());
        assert!(decode_frame(r#"{"type":"message","bot":"Alpha"}"#).is_err());
        assert!(decode_frame(r#"{"type":"grading_complete","run_id":1,"count":-1}"#).is_err());
    }
}
