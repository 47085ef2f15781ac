//! The parlance core: intent classification, handler dispatch, and the
//! per-turn workflow executor.

pub mod classifier;
pub mod executor;
pub mod handler;
pub mod llm;
pub mod session;
