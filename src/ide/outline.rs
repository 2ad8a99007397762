//! Outline derivation — turns an AST snapshot into editor tree rows.
//!
//! Everything here is a pure function over borrowed AST nodes: the host asks
//! for the children of a node and gets back a materialized list, rebuilt on
//! every call. The two mode flags arrive as explicit [`OutlineConfig`]
//! rather than hidden session state so the core stays trivially testable.

use crate::base::Span;
use crate::syntax::{
    Architecture, BlockStatement, ConcurrentStatement, DeclarativeItem, DesignUnit, Entity,
    GenerateStatement, InstantiatedUnit, InterfaceDeclaration, NodeRef, ObjectDeclaration,
    PackageBody, PackageDecl, SequentialProcess, SignalAssignment, SubProgram,
};

use super::hierarchy::{Folder, HierarchyBuilder};

/// Mode flags for one outline query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Group children into synthetic folders instead of source order.
    pub hierarchical: bool,
    /// Sort materialized lists case-insensitively by display name.
    pub sorted: bool,
}

/// One row of the outline tree: a borrowed AST node, or a synthetic
/// [`Folder`] that exists only for the duration of a single query.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineNode<'a> {
    Entity(&'a Entity),
    Architecture(&'a Architecture),
    Package(&'a PackageDecl),
    PackageBody(&'a PackageBody),
    SubProgram(&'a SubProgram),
    Process(&'a SequentialProcess),
    Block(&'a BlockStatement),
    Generate(&'a GenerateStatement),
    Instance(&'a InstantiatedUnit),
    Assignment(&'a SignalAssignment),
    Declaration(&'a ObjectDeclaration),
    Interface(&'a InterfaceDeclaration),
    Folder(Folder<'a>),
}

impl<'a> OutlineNode<'a> {
    /// The name shown in the outline row; also the sort key.
    pub fn display_name(&self) -> &str {
        match self {
            OutlineNode::Entity(e) => &e.name,
            OutlineNode::Architecture(a) => &a.name,
            OutlineNode::Package(p) => &p.name,
            OutlineNode::PackageBody(b) => &b.name,
            OutlineNode::SubProgram(s) => &s.name,
            OutlineNode::Process(p) => p.label.as_deref().unwrap_or(""),
            OutlineNode::Block(b) => b.label.as_deref().unwrap_or(""),
            OutlineNode::Generate(g) => g.label.as_deref().unwrap_or(""),
            OutlineNode::Instance(i) => i.label.as_deref().unwrap_or(""),
            OutlineNode::Assignment(a) => a.label.as_deref().unwrap_or(""),
            OutlineNode::Declaration(d) => &d.name,
            OutlineNode::Interface(i) => &i.name,
            OutlineNode::Folder(f) => f.label(),
        }
    }

    /// Source location of the underlying AST node. Folders are synthetic
    /// and have no location.
    pub fn span(&self) -> Option<Span> {
        match self {
            OutlineNode::Entity(e) => Some(e.span),
            OutlineNode::Architecture(a) => Some(a.span),
            OutlineNode::Package(p) => Some(p.span),
            OutlineNode::PackageBody(b) => Some(b.span),
            OutlineNode::SubProgram(s) => Some(s.span),
            OutlineNode::Process(p) => Some(p.span),
            OutlineNode::Block(b) => Some(b.span),
            OutlineNode::Generate(g) => Some(g.span),
            OutlineNode::Instance(i) => Some(i.span),
            OutlineNode::Assignment(a) => Some(a.span),
            OutlineNode::Declaration(d) => Some(d.span),
            OutlineNode::Interface(i) => Some(i.span),
            OutlineNode::Folder(_) => None,
        }
    }

    /// Whether this row is a synthetic folder. The host must anchor
    /// expand/collapse state to AST-backed rows, not folders.
    pub fn is_folder(&self) -> bool {
        matches!(self, OutlineNode::Folder(_))
    }
}

/// Wrap a library unit as an outline row.
pub fn unit_node(unit: &DesignUnit) -> OutlineNode<'_> {
    match unit {
        DesignUnit::Entity(e) => OutlineNode::Entity(e),
        DesignUnit::Architecture(a) => OutlineNode::Architecture(a),
        DesignUnit::Package(p) => OutlineNode::Package(p),
        DesignUnit::PackageBody(b) => OutlineNode::PackageBody(b),
    }
}

fn declaration_node(item: &DeclarativeItem) -> OutlineNode<'_> {
    match item {
        DeclarativeItem::Object(o) => OutlineNode::Declaration(o),
        DeclarativeItem::SubProgram(s) => OutlineNode::SubProgram(s),
    }
}

fn statement_node(stmt: &ConcurrentStatement) -> OutlineNode<'_> {
    match stmt {
        ConcurrentStatement::Process(p) => OutlineNode::Process(p),
        ConcurrentStatement::Instantiation(i) => OutlineNode::Instance(i),
        ConcurrentStatement::Generate(g) => OutlineNode::Generate(g),
        ConcurrentStatement::Block(b) => OutlineNode::Block(b),
        ConcurrentStatement::Assignment(a) => OutlineNode::Assignment(a),
    }
}

// ============================================================================
// VISIBILITY FILTER
// ============================================================================

/// Whether a node gets an outline row at all.
///
/// Ranges never do. Statement-like nodes need a non-empty label; the rule is
/// uniform, so an unlabeled process or instance is dropped like any other
/// anonymous statement. Declarations and interface declarations always show.
pub fn is_visible(node: NodeRef<'_>) -> bool {
    match node {
        NodeRef::Range(_) => false,
        NodeRef::Statement(stmt) => stmt.label().is_some_and(|l| !l.is_empty()),
        NodeRef::Declaration(_) | NodeRef::Interface(_) => true,
    }
}

// ============================================================================
// FLATTENING
// ============================================================================

/// Flat-mode step: append the node to `sink` if it is visible, else drop it.
///
/// Deliberately does not recurse: blocks and generates keep their own row
/// and the host expands them on demand.
fn filter_child<'a>(node: NodeRef<'a>, sink: &mut Vec<OutlineNode<'a>>) {
    if !is_visible(node) {
        return;
    }
    match node {
        NodeRef::Declaration(item) => sink.push(declaration_node(item)),
        NodeRef::Interface(decl) => sink.push(OutlineNode::Interface(decl)),
        NodeRef::Statement(stmt) => sink.push(statement_node(stmt)),
        NodeRef::Range(_) => {}
    }
}

/// Hierarchical-mode step: lift processes and instantiations out of
/// arbitrarily deep generate/block nesting, dissolving the structural
/// containers themselves. The label rule applies here too, so anonymous
/// processes and instances stay hidden. Other statement kinds are dropped.
fn extract_statement<'a, K>(stmt: &'a ConcurrentStatement, builder: &mut HierarchyBuilder<'a, K>)
where
    K: Fn(&OutlineNode<'a>) -> smol_str::SmolStr,
{
    match stmt {
        ConcurrentStatement::Process(p) if is_visible(NodeRef::Statement(stmt)) => {
            builder.add(OutlineNode::Process(p));
        }
        ConcurrentStatement::Instantiation(i) if is_visible(NodeRef::Statement(stmt)) => {
            builder.add(OutlineNode::Instance(i));
        }
        ConcurrentStatement::Generate(g) => {
            for nested in &g.statements {
                extract_statement(nested, builder);
            }
        }
        ConcurrentStatement::Block(b) => {
            for nested in &b.statements {
                extract_statement(nested, builder);
            }
        }
        _ => {}
    }
}

// ============================================================================
// SORT POLICY
// ============================================================================

/// Stable case-insensitive sort by display name. Stability keeps equal-key
/// items in original order.
pub fn sort_nodes(nodes: &mut [OutlineNode<'_>]) {
    nodes.sort_by(|a, b| {
        a.display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase())
    });
}

// ============================================================================
// PROVIDER DISPATCH
// ============================================================================

/// Materialize the children of an outline row under the given mode flags.
///
/// Returns `None` for rows with no child concept at all, which the host
/// treats as leaves. Unknown-to-the-outline kinds fall into that bucket by
/// construction.
pub fn children<'a>(node: &OutlineNode<'a>, config: OutlineConfig) -> Option<Vec<OutlineNode<'a>>> {
    match node {
        &OutlineNode::Entity(entity) => Some(entity_children(entity, config)),
        &OutlineNode::Architecture(arch) => Some(architecture_children(arch, config)),
        &OutlineNode::Package(pkg) => Some(package_children(pkg, config)),
        // Declaration-order containers: mode flags never apply here
        &OutlineNode::PackageBody(body) => Some(declaration_list(&body.declarations)),
        &OutlineNode::SubProgram(sub) => Some(declaration_list(&sub.declarations)),
        &OutlineNode::Process(proc_) => Some(declaration_list(&proc_.declarations)),
        // Structural containers stay flat even in hierarchical mode
        &OutlineNode::Block(block) => Some(structural_children(block.children())),
        &OutlineNode::Generate(g) => Some(structural_children(g.children())),
        OutlineNode::Folder(folder) => Some(folder.items().to_vec()),
        OutlineNode::Instance(_) | OutlineNode::Assignment(_) => None,
        OutlineNode::Declaration(_) | OutlineNode::Interface(_) => None,
    }
}

/// Cheap structural `hasChildren` test, except for blocks and generates
/// where visibility filtering can empty an apparently non-empty container,
/// so the child list is actually materialized.
pub fn has_children(node: &OutlineNode<'_>) -> bool {
    match node {
        OutlineNode::Entity(_)
        | OutlineNode::Architecture(_)
        | OutlineNode::Package(_)
        | OutlineNode::PackageBody(_)
        | OutlineNode::SubProgram(_)
        | OutlineNode::Folder(_) => true,
        OutlineNode::Process(p) => !p.declarations.is_empty(),
        OutlineNode::Block(b) => !structural_children(b.children()).is_empty(),
        OutlineNode::Generate(g) => !structural_children(g.children()).is_empty(),
        OutlineNode::Instance(_)
        | OutlineNode::Assignment(_)
        | OutlineNode::Declaration(_)
        | OutlineNode::Interface(_) => false,
    }
}

fn entity_children<'a>(entity: &'a Entity, config: OutlineConfig) -> Vec<OutlineNode<'a>> {
    if config.hierarchical {
        let mut builder = HierarchyBuilder::new();
        for decl in &entity.declarations {
            builder.add(declaration_node(decl));
        }
        for idecl in entity.interface_declarations() {
            builder.add(OutlineNode::Interface(idecl));
        }
        return builder.into_folders(config.sorted);
    }

    let mut list: Vec<OutlineNode<'a>> = entity
        .interface_declarations()
        .map(OutlineNode::Interface)
        .collect();
    if config.sorted {
        sort_nodes(&mut list);
    }
    list
}

fn architecture_children<'a>(arch: &'a Architecture, config: OutlineConfig) -> Vec<OutlineNode<'a>> {
    if config.hierarchical {
        let mut builder = HierarchyBuilder::new();
        for decl in &arch.declarations {
            builder.add(declaration_node(decl));
        }
        for stmt in &arch.statements {
            extract_statement(stmt, &mut builder);
        }
        return builder.into_folders(config.sorted);
    }

    let mut list: Vec<OutlineNode<'a>> = arch.declarations.iter().map(declaration_node).collect();
    for stmt in &arch.statements {
        filter_child(NodeRef::Statement(stmt), &mut list);
    }
    if config.sorted {
        sort_nodes(&mut list);
    }
    list
}

fn package_children<'a>(pkg: &'a PackageDecl, config: OutlineConfig) -> Vec<OutlineNode<'a>> {
    if config.hierarchical {
        let mut builder = HierarchyBuilder::new();
        for decl in &pkg.declarations {
            builder.add(declaration_node(decl));
        }
        return builder.into_folders(config.sorted);
    }

    let mut list: Vec<OutlineNode<'a>> = pkg.declarations.iter().map(declaration_node).collect();
    if config.sorted {
        sort_nodes(&mut list);
    }
    list
}

/// Declarations in declared order, immune to both mode flags.
fn declaration_list(declarations: &[DeclarativeItem]) -> Vec<OutlineNode<'_>> {
    declarations.iter().map(declaration_node).collect()
}

fn structural_children<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<OutlineNode<'a>> {
    let mut list = Vec::new();
    for node in nodes {
        filter_child(node, &mut list);
    }
    list
}
