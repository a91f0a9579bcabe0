//! Core building blocks: errors, optional-value helpers, configuration.
//!
//! Everything else in the crate reports failures through [`CardError`].

pub mod config;
pub mod error;
pub mod optional;

pub use config::SummaryConfig;
pub use error::{CardError, Result};
pub use optional::Optional;
