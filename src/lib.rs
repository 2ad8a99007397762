//! # volund-base
//!
//! Core library for VHDL design unit modeling and editor outline views.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Outline derivation, session façade for the host editor
//!   ↓
//! syntax    → VHDL AST node model (design units, declarations, statements)
//!   ↓
//! base      → Primitives (Position, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: Position, Span
pub mod base;

/// Syntax: the VHDL AST node model consumed read-only by the IDE layer
pub mod syntax;

/// IDE features: outline tree derivation and the per-document session
pub mod ide;

// Re-export foundation types
pub use base::{Position, Span};
