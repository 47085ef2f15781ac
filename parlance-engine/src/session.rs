//! In-memory session state: one transcript, one executor, one user.

use chrono::{DateTime, Utc};

use parlance_core::transcript::Transcript;

use crate::executor::{TurnExecutor, TurnOutcome};

pub type SessionId = uuid::Uuid;

/// A single chat session.
///
/// Owns the transcript and the executor; lives for the process lifetime
/// and is dropped with it. One submission runs to completion before the
/// next is accepted.
pub struct ChatSession {
    id: SessionId,
    executor: TurnExecutor,
    transcript: Transcript,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(executor: TurnExecutor) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new_v4(),
            executor,
            transcript: Transcript::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Submit one user input. Skipped turns leave the session untouched.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        let outcome = self.executor.execute_turn(input, &mut self.transcript).await;
        if matches!(outcome, TurnOutcome::Replied { .. }) {
            self.updated_at = Utc::now();
        }
        outcome
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
