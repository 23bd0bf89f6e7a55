//! Shared infrastructure for the vtlower translator.
//!
//! This crate provides:
//! - The error taxonomy every stage reports through (`TranslateError`)
//! - Translator configuration (`vtlower.toml`)

mod config;
mod error;

pub use config::{EntryConfig, OutputConfig, RuntimeConfig, TranslatorConfig};
pub use error::{Result, TranslateError};

/// Parent-name sentinel marking a root class.
pub const ROOT_SENTINEL: &str = "null";

/// Reserved identifier bound to the receiver in lowered code.
pub const SELF_IDENT: &str = "__this";
