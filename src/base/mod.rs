//! Foundation types for the Volund toolchain.
//!
//! This module provides fundamental types used throughout the library:
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//!
//! This module has NO dependencies on other volund modules.

mod position;

pub use position::{Position, Span};
