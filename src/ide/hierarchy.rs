//! Synthetic folder grouping for hierarchical outline mode.
//!
//! Folders carry no AST identity: they are rebuilt on every query and exist
//! only inside the returned child list. The grouping taxonomy is an
//! injectable key function; any total, deterministic key is valid, and every
//! added item lands in exactly one group.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::outline::{OutlineNode, sort_nodes};

/// A synthetic outline row grouping related children.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder<'a> {
    label: SmolStr,
    items: Vec<OutlineNode<'a>>,
}

impl<'a> Folder<'a> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[OutlineNode<'a>] {
        &self.items
    }
}

/// Default grouping: by node class, object declarations further split by
/// their declaration category.
pub fn default_group_key(node: &OutlineNode<'_>) -> SmolStr {
    match node {
        OutlineNode::Declaration(d) => d.kind.category().into(),
        OutlineNode::SubProgram(_) => "Subprograms".into(),
        OutlineNode::Interface(i) => match i.kind {
            crate::syntax::InterfaceKind::Generic => "Generics".into(),
            crate::syntax::InterfaceKind::Port => "Ports".into(),
        },
        OutlineNode::Process(_) => "Processes".into(),
        OutlineNode::Instance(_) => "Instances".into(),
        OutlineNode::Assignment(_) => "Assignments".into(),
        OutlineNode::Block(_) => "Blocks".into(),
        OutlineNode::Generate(_) => "Generates".into(),
        OutlineNode::Entity(_)
        | OutlineNode::Architecture(_)
        | OutlineNode::Package(_)
        | OutlineNode::PackageBody(_) => "Units".into(),
        OutlineNode::Folder(_) => "Folders".into(),
    }
}

/// Accumulates outline rows into labeled groups, then materializes them as
/// [`Folder`] nodes. Insertion order of groups is preserved unless the
/// sorted flag asks for alphabetical order.
pub struct HierarchyBuilder<'a, K = fn(&OutlineNode<'a>) -> SmolStr> {
    key: K,
    groups: IndexMap<SmolStr, Vec<OutlineNode<'a>>>,
}

impl<'a> HierarchyBuilder<'a> {
    /// Builder with the default group key.
    pub fn new() -> Self {
        Self::with_key(default_group_key as fn(&OutlineNode<'a>) -> SmolStr)
    }
}

impl<'a> Default for HierarchyBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> HierarchyBuilder<'a, K>
where
    K: Fn(&OutlineNode<'a>) -> SmolStr,
{
    /// Builder with a caller-supplied group key. The key must be total and
    /// deterministic; nothing else is assumed about it.
    pub fn with_key(key: K) -> Self {
        Self {
            key,
            groups: IndexMap::new(),
        }
    }

    /// Add one row to its group.
    pub fn add(&mut self, node: OutlineNode<'a>) {
        let label = (self.key)(&node);
        self.groups.entry(label).or_default().push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Materialize the groups as folder rows.
    pub fn into_folders(self, sorted: bool) -> Vec<OutlineNode<'a>> {
        let mut folders: Vec<OutlineNode<'a>> = self
            .groups
            .into_iter()
            .map(|(label, mut items)| {
                if sorted {
                    sort_nodes(&mut items);
                }
                OutlineNode::Folder(Folder { label, items })
            })
            .collect();
        if sorted {
            sort_nodes(&mut folders);
        }
        folders
    }
}
