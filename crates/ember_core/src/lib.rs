//! ember_core: Core utilities for the Ember front end.
//!
//! Provides text spans, line maps and the host-level error type shared by
//! the scanner, parser and command-line driver.

pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{EmberError, Result};
pub use text::{LineAndColumn, LineMap, TextSpan};
