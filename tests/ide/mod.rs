//! IDE feature tests
//!
//! Tests for:
//! - Flat outline traversal and visibility filtering
//! - Hierarchical folder grouping
//! - Sorting
//! - The per-document outline session

pub mod tests_outline;
