//! Keyword-based intent classification.

use parlance_core::intent::Intent;

/// Classify one user message into an [`Intent`].
///
/// Total function: rules are checked top-to-bottom over the lower-cased
/// input and the first match wins, with general chat as the unconditional
/// fallback. The ordering is deliberate — a message carrying both a
/// summarization cue and a fact-check cue resolves to summarization.
pub fn classify(input: &str) -> Intent {
    let normalized = input.to_lowercase();

    if normalized.contains("summarize") {
        return Intent::Summarize;
    }
    if normalized.contains("is it true") || normalized.contains("fact-check") {
        return Intent::FactCheck;
    }
    Intent::GeneralChat
}
