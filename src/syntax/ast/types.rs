use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::enums::{
    ConcurrentStatement, DeclKind, DeclarativeItem, DesignUnit, GenerateKind, InterfaceKind,
    NodeRef, PortDirection, SubProgramKind,
};
use crate::base::Span;

// ============================================================================
// DESIGN FILE
// ============================================================================

/// One parse snapshot of a VHDL source file: the ordered library units plus
/// a name index so the host can locate the unit backing an editor buffer.
///
/// Snapshots are immutable once built; a re-parse replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignFile {
    units: Vec<DesignUnit>,
    by_name: FxHashMap<SmolStr, usize>,
}

impl DesignFile {
    pub fn new(units: Vec<DesignUnit>) -> Self {
        let mut by_name = FxHashMap::default();
        for (i, unit) in units.iter().enumerate() {
            // First declaration wins on duplicate names
            by_name.entry(unit.name().clone()).or_insert(i);
        }
        Self { units, by_name }
    }

    /// The library units in source order.
    pub fn units(&self) -> &[DesignUnit] {
        &self.units
    }

    /// Look up a unit by name.
    pub fn unit(&self, name: &str) -> Option<&DesignUnit> {
        self.by_name.get(name).map(|&i| &self.units[i])
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

// ============================================================================
// LIBRARY UNITS
// ============================================================================

/// An entity declaration: interface (generics/ports) plus its own
/// declarative part.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: SmolStr,
    pub generics: Vec<InterfaceDeclaration>,
    pub ports: Vec<InterfaceDeclaration>,
    pub declarations: Vec<DeclarativeItem>,
    pub span: Span,
}

impl Entity {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            ports: Vec::new(),
            declarations: Vec::new(),
            span,
        }
    }

    /// All interface declarations, generics first, in declared order.
    pub fn interface_declarations(&self) -> impl Iterator<Item = &InterfaceDeclaration> {
        self.generics.iter().chain(self.ports.iter())
    }
}

/// An architecture body implementing an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Architecture {
    pub name: SmolStr,
    pub entity_name: SmolStr,
    pub declarations: Vec<DeclarativeItem>,
    pub statements: Vec<ConcurrentStatement>,
    pub span: Span,
}

impl Architecture {
    pub fn new(name: impl Into<SmolStr>, entity_name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            entity_name: entity_name.into(),
            declarations: Vec::new(),
            statements: Vec::new(),
            span,
        }
    }
}

/// A package declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDecl {
    pub name: SmolStr,
    pub declarations: Vec<DeclarativeItem>,
    pub span: Span,
}

impl PackageDecl {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            span,
        }
    }
}

/// A package body.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageBody {
    pub name: SmolStr,
    pub declarations: Vec<DeclarativeItem>,
    pub span: Span,
}

impl PackageBody {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            span,
        }
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// An object-like declaration (signal, constant, type, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDeclaration {
    pub name: SmolStr,
    pub kind: DeclKind,
    pub span: Span,
}

impl ObjectDeclaration {
    pub fn new(name: impl Into<SmolStr>, kind: DeclKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            span,
        }
    }
}

/// A generic or port declaration from an entity interface list.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub name: SmolStr,
    pub kind: InterfaceKind,
    pub direction: Option<PortDirection>,
    pub type_name: SmolStr,
    pub span: Span,
}

impl InterfaceDeclaration {
    pub fn new(
        name: impl Into<SmolStr>,
        kind: InterfaceKind,
        direction: Option<PortDirection>,
        type_name: impl Into<SmolStr>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            direction,
            type_name: type_name.into(),
            span,
        }
    }
}

/// A subprogram (procedure or function) declaration with its body's
/// declarative part.
#[derive(Debug, Clone, PartialEq)]
pub struct SubProgram {
    pub name: SmolStr,
    pub kind: SubProgramKind,
    pub declarations: Vec<DeclarativeItem>,
    pub span: Span,
}

impl SubProgram {
    pub fn new(name: impl Into<SmolStr>, kind: SubProgramKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            declarations: Vec::new(),
            span,
        }
    }
}

// ============================================================================
// CONCURRENT STATEMENTS
// ============================================================================

/// A process statement with its declarative part and sensitivity list.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialProcess {
    pub label: Option<SmolStr>,
    pub declarations: Vec<DeclarativeItem>,
    pub sensitivity: Vec<SmolStr>,
    pub span: Span,
}

impl SequentialProcess {
    pub fn new(label: Option<SmolStr>, span: Span) -> Self {
        Self {
            label,
            declarations: Vec::new(),
            sensitivity: Vec::new(),
            span,
        }
    }
}

/// A block statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub label: Option<SmolStr>,
    pub statements: Vec<ConcurrentStatement>,
    pub span: Span,
}

impl BlockStatement {
    pub fn new(label: Option<SmolStr>, span: Span) -> Self {
        Self {
            label,
            statements: Vec::new(),
            span,
        }
    }

    /// Direct children as kind-tagged references.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.statements.iter().map(NodeRef::Statement)
    }
}

/// A generate statement (`for ... generate` or `if ... generate`).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateStatement {
    pub label: Option<SmolStr>,
    pub kind: GenerateKind,
    pub range: Option<RangeConstraint>,
    pub statements: Vec<ConcurrentStatement>,
    pub span: Span,
}

impl GenerateStatement {
    pub fn new(label: Option<SmolStr>, kind: GenerateKind, span: Span) -> Self {
        Self {
            label,
            kind,
            range: None,
            statements: Vec::new(),
            span,
        }
    }

    /// Direct children as kind-tagged references. The iteration range comes
    /// first, matching its position in the source.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.range
            .iter()
            .map(NodeRef::Range)
            .chain(self.statements.iter().map(NodeRef::Statement))
    }
}

/// A component or entity instantiation.
#[derive(Debug, Clone, PartialEq)]
pub struct InstantiatedUnit {
    pub label: Option<SmolStr>,
    pub unit_name: SmolStr,
    pub span: Span,
}

impl InstantiatedUnit {
    pub fn new(label: Option<SmolStr>, unit_name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            label,
            unit_name: unit_name.into(),
            span,
        }
    }
}

/// A concurrent signal assignment. Usually unlabeled in real sources.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalAssignment {
    pub label: Option<SmolStr>,
    pub target: SmolStr,
    pub span: Span,
}

impl SignalAssignment {
    pub fn new(label: Option<SmolStr>, target: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            label,
            target: target.into(),
            span,
        }
    }
}

/// A discrete range, e.g. the `0 to 7` of a for-generate.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeConstraint {
    pub ascending: bool,
    pub left: SmolStr,
    pub right: SmolStr,
    pub span: Span,
}

impl RangeConstraint {
    pub fn new(ascending: bool, left: impl Into<SmolStr>, right: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            ascending,
            left: left.into(),
            right: right.into(),
            span,
        }
    }
}
