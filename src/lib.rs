//! sia - Startup Idea Analyzer
//!
//! A CLI and library for LLM-backed startup-idea analysis with
//! multi-provider failover: health probing, priority-ordered fallback,
//! exponential-backoff retry, and degradation to bundled sample content
//! when every provider is unreachable.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod util;

pub use error::{ErrorKind, ExitCode, Result, SiaError};
