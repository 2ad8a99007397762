//! IDE features — the editor outline over a VHDL AST snapshot.
//!
//! This module turns an already-built AST into the navigable tree shown in
//! an editor's outline panel.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: queries take data in and return data out; the two
//!    mode flags travel as an explicit [`OutlineConfig`]
//! 2. **No UI types**: hosts convert [`OutlineNode`] rows at their boundary
//! 3. **Rebuilt per call**: nothing is cached, synthetic folders have no
//!    identity across queries
//!
//! ## Usage
//!
//! ```ignore
//! use volund::ide::OutlineSession;
//!
//! let mut session = OutlineSession::new();
//! session.publish(design_file);
//!
//! for root in session.root_elements() {
//!     let children = session.children(&root);
//! }
//! ```

mod hierarchy;
mod outline;
mod session;

pub use hierarchy::{Folder, HierarchyBuilder, default_group_key};
pub use outline::{
    OutlineConfig, OutlineNode, children, has_children, is_visible, sort_nodes, unit_node,
};
pub use session::{OutlineSession, SnapshotError};
