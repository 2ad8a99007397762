//! OutlineSession — host-facing state for one open document.
//!
//! The session owns the current parse snapshot, the dirty flag and the two
//! mode flags. Queries delegate to the pure functions in [`super::outline`];
//! nothing is cached, so a toggled flag is reflected on the next query with
//! no invalidation step.

use thiserror::Error;
use tracing::debug;

use crate::syntax::DesignFile;

use super::outline::{self, OutlineConfig, OutlineNode, unit_node};

/// Why the session has no usable snapshot right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The backing document has uncommitted edits; the last snapshot is
    /// stale and must not be shown.
    #[error("document has unsaved edits, outline is unavailable")]
    DirtyDocument,
    /// No parse snapshot has been published yet.
    #[error("no parse snapshot has been published")]
    NoSnapshot,
}

/// Outline state bound to one open editor document.
#[derive(Debug, Default)]
pub struct OutlineSession {
    snapshot: Option<DesignFile>,
    dirty: bool,
    hierarchical: bool,
    sorted: bool,
}

impl OutlineSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly parsed snapshot, replacing the previous one and
    /// clearing the dirty flag.
    pub fn publish(&mut self, file: DesignFile) {
        debug!(units = file.units().len(), "published outline snapshot");
        self.snapshot = Some(file);
        self.dirty = false;
    }

    /// Mark the backing document as edited since the last snapshot.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_hierarchical(&mut self, hierarchical: bool) {
        self.hierarchical = hierarchical;
    }

    pub fn set_sorted(&mut self, sorted: bool) {
        self.sorted = sorted;
    }

    /// The mode flags as an explicit per-query config.
    pub fn config(&self) -> OutlineConfig {
        OutlineConfig {
            hierarchical: self.hierarchical,
            sorted: self.sorted,
        }
    }

    fn snapshot(&self) -> Result<&DesignFile, SnapshotError> {
        if self.dirty {
            return Err(SnapshotError::DirtyDocument);
        }
        self.snapshot.as_ref().ok_or(SnapshotError::NoSnapshot)
    }

    /// Root outline rows: the file's library units in source order, or
    /// nothing at all while the document is dirty or unparsed.
    pub fn root_elements(&self) -> Vec<OutlineNode<'_>> {
        match self.snapshot() {
            Ok(file) => file.units().iter().map(unit_node).collect(),
            Err(err) => {
                debug!(%err, "outline roots unavailable");
                Vec::new()
            }
        }
    }

    /// Children of a row under the current mode flags. `None` means leaf.
    pub fn children<'a>(&self, node: &OutlineNode<'a>) -> Option<Vec<OutlineNode<'a>>> {
        outline::children(node, self.config())
    }

    pub fn has_children(&self, node: &OutlineNode<'_>) -> bool {
        outline::has_children(node)
    }

    /// Upward navigation is not supported here; hosts that need it must use
    /// the AST's own parent links.
    pub fn parent<'a>(&self, _node: &OutlineNode<'a>) -> Option<OutlineNode<'a>> {
        None
    }

    /// Drop the snapshot. A disposed session answers every query with
    /// nothing rather than stale rows.
    pub fn dispose(&mut self) {
        self.snapshot = None;
        self.dirty = false;
    }
}
