//! Shared types for the parlance chat front-end.
//!
//! Everything here is plain data: the intent taxonomy, the append-only
//! transcript, the TOML configuration schema, and the error taxonomy.
//! No I/O happens in this crate.

pub mod config;
pub mod error;
pub mod intent;
pub mod transcript;
