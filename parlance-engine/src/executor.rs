//! The per-turn workflow executor: classify, dispatch, respond, record.

use parlance_core::intent::Intent;
use parlance_core::transcript::Transcript;

use crate::classifier::classify;
use crate::handler::HandlerSet;

/// Whether a turn is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Processing,
}

/// Result of submitting one input to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty or whitespace; nothing was executed or recorded.
    Skipped,
    /// A handler ran and produced displayable text. On handler failure the
    /// text is the error's user-facing message, never a fault.
    Replied { intent: Intent, text: String },
}

/// Executes one turn at a time against a fixed handler binding.
///
/// The executor owns the classification-and-dispatch decision; it does not
/// own the transcript, which the caller passes in per turn and which is
/// only appended to after a result is produced. `&mut self` on
/// [`TurnExecutor::execute_turn`] is what rules out concurrent turns.
pub struct TurnExecutor {
    handlers: HandlerSet,
    state: TurnState,
}

impl TurnExecutor {
    pub fn new(handlers: HandlerSet) -> Self {
        Self {
            handlers,
            state: TurnState::Idle,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Run one turn: classify `input`, invoke the bound handler, append the
    /// (User, Bot) pair to `transcript`, and return the outcome.
    ///
    /// Empty-after-trim input is a silent no-op. A handler failure is
    /// converted into a short user-visible string here — the caller always
    /// receives displayable text for a submitted turn.
    pub async fn execute_turn(
        &mut self,
        input: &str,
        transcript: &mut Transcript,
    ) -> TurnOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            tracing::debug!("empty input, skipping turn");
            return TurnOutcome::Skipped;
        }

        self.state = TurnState::Processing;

        let intent = classify(trimmed);
        tracing::debug!(intent = %intent, "dispatching turn");

        let handler = self.handlers.resolve(intent);
        let text = match handler.handle(trimmed).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(intent = %intent, error = %err, "handler failed");
                err.user_message().to_string()
            }
        };

        transcript.record_exchange(trimmed, &text);
        self.state = TurnState::Idle;

        tracing::info!(intent = %intent, response_chars = text.chars().count(), "turn completed");
        TurnOutcome::Replied { intent, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parlance_core::error::HandlerError;
    use parlance_core::transcript::Speaker;

    use crate::handler::{FACT_CHECK_REPLY, SUMMARY_PREFIX};
    use crate::llm::{GenerationParams, ScriptedCompletionClient};

    fn executor_with(responses: Vec<Result<String, HandlerError>>) -> TurnExecutor {
        let client = Arc::new(ScriptedCompletionClient::new(responses));
        TurnExecutor::new(HandlerSet::new(client, GenerationParams::default()))
    }

    #[tokio::test]
    async fn empty_and_whitespace_input_record_nothing() {
        let mut executor = executor_with(vec![]);
        let mut transcript = Transcript::new();

        assert_eq!(
            executor.execute_turn("", &mut transcript).await,
            TurnOutcome::Skipped
        );
        assert_eq!(
            executor.execute_turn("   ", &mut transcript).await,
            TurnOutcome::Skipped
        );
        assert!(transcript.is_empty());
        assert_eq!(executor.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn general_chat_turn_returns_completion_and_records_pair() {
        let mut executor = executor_with(vec![Ok("hi from the model".into())]);
        let mut transcript = Transcript::new();

        let outcome = executor.execute_turn("hello there", &mut transcript).await;
        assert_eq!(
            outcome,
            TurnOutcome::Replied {
                intent: Intent::GeneralChat,
                text: "hi from the model".into(),
            }
        );
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[0].text, "hello there");
        assert_eq!(transcript.entries()[1].speaker, Speaker::Bot);
        assert_eq!(transcript.entries()[1].text, "hi from the model");
    }

    #[tokio::test]
    async fn stub_turns_never_touch_the_completion_client() {
        // No scripted responses: any completion call would return the
        // fallback text, which neither stub reply contains.
        let mut executor = executor_with(vec![]);
        let mut transcript = Transcript::new();

        let outcome = executor
            .execute_turn("is it true that rust is fast?", &mut transcript)
            .await;
        assert_eq!(
            outcome,
            TurnOutcome::Replied {
                intent: Intent::FactCheck,
                text: FACT_CHECK_REPLY.into(),
            }
        );

        let outcome = executor
            .execute_turn("summarize: rust is fast", &mut transcript)
            .await;
        match outcome {
            TurnOutcome::Replied { intent, text } => {
                assert_eq!(intent, Intent::Summarize);
                assert!(text.starts_with(SUMMARY_PREFIX));
            }
            other => panic!("expected reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_failure_yields_displayable_text_and_one_pair() {
        let mut executor = executor_with(vec![Err(HandlerError::UpstreamUnavailable {
            reason: "connection refused".into(),
        })]);
        let mut transcript = Transcript::new();

        let outcome = executor.execute_turn("hello", &mut transcript).await;
        match outcome {
            TurnOutcome::Replied { intent, text } => {
                assert_eq!(intent, Intent::GeneralChat);
                assert!(!text.is_empty());
                assert!(text.starts_with("Sorry"));
            }
            other => panic!("expected reply, got {other:?}"),
        }

        // The failed turn is still recorded as exactly one (User, Bot) pair.
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[1].speaker, Speaker::Bot);
        assert_eq!(executor.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn sequential_turns_keep_transcript_ordered_and_alternating() {
        let mut executor = executor_with(vec![Ok("r1".into()), Ok("r2".into()), Ok("r3".into())]);
        let mut transcript = Transcript::new();

        for input in ["first", "second", "third"] {
            executor.execute_turn(input, &mut transcript).await;
        }

        assert_eq!(transcript.len(), 6);
        for (index, entry) in transcript.entries().iter().enumerate() {
            let expected = if index % 2 == 0 {
                Speaker::User
            } else {
                Speaker::Bot
            };
            assert_eq!(entry.speaker, expected);
        }
        let user_lines: Vec<&str> = transcript
            .entries()
            .iter()
            .filter(|e| e.speaker == Speaker::User)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(user_lines, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn input_is_trimmed_before_classification_and_recording() {
        let mut executor = executor_with(vec![]);
        let mut transcript = Transcript::new();

        executor
            .execute_turn("  summarize this  ", &mut transcript)
            .await;
        assert_eq!(transcript.entries()[0].text, "summarize this");
    }
}
