//! Per-intent handlers and the binding that maps every intent to exactly
//! one of them.

use std::sync::Arc;

use async_trait::async_trait;

use parlance_core::error::HandlerError;
use parlance_core::intent::Intent;

use crate::llm::{CompletionClient, GenerationParams};

/// Fixed acknowledgment returned by the fact-check stub.
pub const FACT_CHECK_REPLY: &str = "Let me verify that for you. (Dummy fact-checker)";

/// Prefix prepended to every mock summary.
pub const SUMMARY_PREFIX: &str = "Here's a summary: ";

/// How many characters of the input the mock summarizer echoes back.
pub const SUMMARY_INPUT_CHARS: usize = 100;

/// The unit of logic bound to one intent.
///
/// Handlers are mutually unaware and must not mutate anything outside
/// their own return value; transcript accumulation belongs to the turn
/// executor and the session layer.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, input: &str) -> Result<String, HandlerError>;
}

/// Forwards the raw input as a prompt to the completion backend. The only
/// handler with a side effect, and the only one that can fail.
pub struct GeneralChatHandler {
    client: Arc<dyn CompletionClient>,
    params: GenerationParams,
}

impl GeneralChatHandler {
    pub fn new(client: Arc<dyn CompletionClient>, params: GenerationParams) -> Self {
        Self { client, params }
    }
}

#[async_trait]
impl Handler for GeneralChatHandler {
    async fn handle(&self, input: &str) -> Result<String, HandlerError> {
        self.client.complete(input, &self.params).await
    }
}

/// Deterministic stub: no verification is performed. A real implementation
/// would do retrieval and verification behind the same contract.
pub struct FactCheckHandler;

#[async_trait]
impl Handler for FactCheckHandler {
    async fn handle(&self, _input: &str) -> Result<String, HandlerError> {
        Ok(FACT_CHECK_REPLY.to_string())
    }
}

/// Mock summarizer: echoes the first [`SUMMARY_INPUT_CHARS`] characters of
/// the input behind a fixed prefix. Shorter input passes through whole;
/// truncation past the end is a no-op, never a fault.
pub struct SummarizeHandler;

#[async_trait]
impl Handler for SummarizeHandler {
    async fn handle(&self, input: &str) -> Result<String, HandlerError> {
        // chars, not bytes: slicing at a byte offset could split a
        // multibyte character.
        let excerpt: String = input.chars().take(SUMMARY_INPUT_CHARS).collect();
        Ok(format!("{SUMMARY_PREFIX}{excerpt}"))
    }
}

/// The intent → handler binding.
///
/// One field per intent and an exhaustive match in [`HandlerSet::resolve`],
/// so every intent has exactly one handler by construction — no unmapped
/// intents, no ambiguity.
pub struct HandlerSet {
    general_chat: Box<dyn Handler>,
    fact_check: Box<dyn Handler>,
    summarize: Box<dyn Handler>,
}

impl HandlerSet {
    /// The standard binding: general chat backed by `client`, the two stub
    /// handlers for fact-checking and summarization.
    pub fn new(client: Arc<dyn CompletionClient>, params: GenerationParams) -> Self {
        Self {
            general_chat: Box::new(GeneralChatHandler::new(client, params)),
            fact_check: Box::new(FactCheckHandler),
            summarize: Box::new(SummarizeHandler),
        }
    }

    pub fn resolve(&self, intent: Intent) -> &dyn Handler {
        match intent {
            Intent::GeneralChat => self.general_chat.as_ref(),
            Intent::FactCheck => self.fact_check.as_ref(),
            Intent::Summarize => self.summarize.as_ref(),
        }
    }
}
