//! HTML fragments for feed entries.
//!
//! Every field taken from an event passes through [`escape_html`] before it
//! is placed in markup.

use crate::config::FeedConfig;
use crate::feed::event::FeedEvent;

/// Rendering limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters of message content kept; the rest is dropped without an ellipsis.
    pub preview_chars: usize,
}

impl RenderOptions {
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            preview_chars: config.preview_chars,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&FeedConfig::default())
    }
}

/// Escape text for use in HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Inner HTML for an event, or `None` for events that produce no entry.
pub fn render_event(event: &FeedEvent, options: &RenderOptions) -> Option<String> {
    let html = match event {
        FeedEvent::Message {
            bot,
            content,
            conversation_type,
        } => format!(
            "<strong>{}</strong>: {}<small>{} - just now</small>",
            escape_html(bot),
            escape_html(truncate_chars(content, options.preview_chars)),
            escape_html(conversation_type),
        ),
        FeedEvent::ConversationStart {
            initiator,
            responder,
        } => format!(
            "<em>Conversation started: {} &harr; {}</em><small>just now</small>",
            escape_html(initiator),
            escape_html(responder),
        ),
        FeedEvent::GradingComplete { run_id, count } => format!(
            "<em>Grading run {} complete ({} bots)</em><small>just now</small>",
            escape_html(&run_id.to_string()),
            count,
        ),
        FeedEvent::Unrecognized => return None,
    };
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::event::RunId;

    fn message(bot: &str, content: &str) -> FeedEvent {
        FeedEvent::Message {
            bot: bot.into(),
            content: content.into(),
            conversation_type: "bot-bot".into(),
        }
    }

    #[test]
    fn escapes_substitution_table() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn truncates_by_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }

    #[test]
    fn renders_message() {
        let html = render_event(&message("Alpha", "hi there"), &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            "<strong>Alpha</strong>: hi there<small>bot-bot - just now</small>"
        );
    }

    #[test]
    fn message_content_keeps_first_hundred_chars() {
        let content: String = "x".repeat(100) + "TAIL";
        let html = render_event(&message("Alpha", &content), &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            format!(
                "<strong>Alpha</strong>: {}<small>bot-bot - just now</small>",
                "x".repeat(100)
            )
        );

        let exact = "y".repeat(100);
        let html = render_event(&message("Alpha", &exact), &RenderOptions::default()).unwrap();
        assert!(html.contains(&format!(": {}<small>", exact)));
    }

    #[test]
    fn script_tags_are_escaped() {
        let html = render_event(
            &message("<script>bot</script>", "<script>alert(1)</script>"),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<strong>&lt;script&gt;bot&lt;/script&gt;</strong>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn conversation_type_is_escaped() {
        let event = FeedEvent::Message {
            bot: "A".into(),
            content: "c".into(),
            conversation_type: "<b>bot-human</b>".into(),
        };
        let html = render_event(&event, &RenderOptions::default()).unwrap();
        assert!(html.contains("<small>&lt;b&gt;bot-human&lt;/b&gt; - just now</small>"));
    }

    #[test]
    fn renders_conversation_start() {
        let event = FeedEvent::ConversationStart {
            initiator: "Alpha".into(),
            responder: "Beta & Co".into(),
        };
        assert_eq!(
            render_event(&event, &RenderOptions::default()).unwrap(),
            "<em>Conversation started: Alpha &harr; Beta &amp; Co</em><small>just now</small>"
        );
    }

    #[test]
    fn renders_grading_complete() {
        let event = FeedEvent::GradingComplete {
            run_id: RunId::Number(12),
            count: 4,
        };
        assert_eq!(
            render_event(&event, &RenderOptions::default()).unwrap(),
            "<em>Grading run 12 complete (4 bots)</em><small>just now</small>"
        );
    }

    #[test]
    fn unrecognized_renders_nothing() {
        assert!(render_event(&FeedEvent::Unrecognized, &RenderOptions::default()).is_none());
    }
}
