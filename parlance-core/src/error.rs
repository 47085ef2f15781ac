use std::time::Duration;

/// Failures a handler can report for a single turn.
///
/// Only the general-chat handler talks to an upstream service, so every
/// variant here describes an upstream fault. Handler errors never escape
/// the turn executor: each kind maps to a displayable sentence via
/// [`HandlerError::user_message`], and the turn completes with that text
/// as the bot response. Empty input is not an error — the executor skips
/// the turn entirely and records nothing.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("upstream unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    #[error("upstream returned an unusable response: {reason}")]
    UpstreamBadResponse { reason: String },

    #[error("upstream timed out after {elapsed:?}")]
    UpstreamTimeout { elapsed: Duration },
}

impl HandlerError {
    /// Short human-readable text shown to the user in place of a response.
    pub fn user_message(&self) -> &'static str {
        match self {
            HandlerError::UpstreamUnavailable { .. } => {
                "Sorry, I couldn't reach the language model right now."
            }
            HandlerError::UpstreamBadResponse { .. } => {
                "Sorry, the language model returned something I couldn't understand."
            }
            HandlerError::UpstreamTimeout { .. } => {
                "Sorry, the language model took too long to respond."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_non_empty_and_distinct() {
        let errors = [
            HandlerError::UpstreamUnavailable {
                reason: "connection refused".into(),
            },
            HandlerError::UpstreamBadResponse {
                reason: "missing choices".into(),
            },
            HandlerError::UpstreamTimeout {
                elapsed: Duration::from_secs(30),
            },
        ];

        let messages: Vec<&str> = errors.iter().map(|e| e.user_message()).collect();
        for message in &messages {
            assert!(!message.is_empty());
        }
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn display_includes_reason() {
        let error = HandlerError::UpstreamUnavailable {
            reason: "connection refused".into(),
        };
        assert_eq!(
            error.to_string(),
            "upstream unavailable: connection refused"
        );
    }
}
