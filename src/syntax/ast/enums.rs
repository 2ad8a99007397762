use smol_str::SmolStr;

use super::types::{
    Architecture, BlockStatement, Entity, GenerateStatement, InstantiatedUnit,
    InterfaceDeclaration, ObjectDeclaration, PackageBody, PackageDecl, RangeConstraint,
    SequentialProcess, SignalAssignment, SubProgram,
};
use crate::base::Span;

/// A library unit at the root of a design file.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignUnit {
    Entity(Entity),
    Architecture(Architecture),
    Package(PackageDecl),
    PackageBody(PackageBody),
}

impl DesignUnit {
    pub fn name(&self) -> &SmolStr {
        match self {
            DesignUnit::Entity(e) => &e.name,
            DesignUnit::Architecture(a) => &a.name,
            DesignUnit::Package(p) => &p.name,
            DesignUnit::PackageBody(b) => &b.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            DesignUnit::Entity(e) => e.span,
            DesignUnit::Architecture(a) => a.span,
            DesignUnit::Package(p) => p.span,
            DesignUnit::PackageBody(b) => b.span,
        }
    }
}

/// A statement in a concurrent region (architecture body, block, generate).
#[derive(Debug, Clone, PartialEq)]
pub enum ConcurrentStatement {
    Process(SequentialProcess),
    Instantiation(InstantiatedUnit),
    Generate(GenerateStatement),
    Block(BlockStatement),
    Assignment(SignalAssignment),
}

impl ConcurrentStatement {
    /// The statement's label, if the source gave it one.
    ///
    /// Unlabeled statements are structural noise for outline purposes.
    pub fn label(&self) -> Option<&str> {
        match self {
            ConcurrentStatement::Process(p) => p.label.as_deref(),
            ConcurrentStatement::Instantiation(i) => i.label.as_deref(),
            ConcurrentStatement::Generate(g) => g.label.as_deref(),
            ConcurrentStatement::Block(b) => b.label.as_deref(),
            ConcurrentStatement::Assignment(a) => a.label.as_deref(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ConcurrentStatement::Process(p) => p.span,
            ConcurrentStatement::Instantiation(i) => i.span,
            ConcurrentStatement::Generate(g) => g.span,
            ConcurrentStatement::Block(b) => b.span,
            ConcurrentStatement::Assignment(a) => a.span,
        }
    }
}

/// An item from a declarative part. Subprograms are containers in their own
/// right; everything else is a plain object-like declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarativeItem {
    Object(ObjectDeclaration),
    SubProgram(SubProgram),
}

impl DeclarativeItem {
    pub fn name(&self) -> &SmolStr {
        match self {
            DeclarativeItem::Object(o) => &o.name,
            DeclarativeItem::SubProgram(s) => &s.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            DeclarativeItem::Object(o) => o.span,
            DeclarativeItem::SubProgram(s) => s.span,
        }
    }
}

/// The class of an object-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Signal,
    Constant,
    Variable,
    Type,
    Subtype,
    Component,
    Alias,
    Attribute,
    File,
}

impl DeclKind {
    /// Plural display category, used for grouped outline folders.
    pub fn category(&self) -> &'static str {
        match self {
            DeclKind::Signal => "Signals",
            DeclKind::Constant => "Constants",
            DeclKind::Variable => "Variables",
            DeclKind::Type => "Types",
            DeclKind::Subtype => "Subtypes",
            DeclKind::Component => "Components",
            DeclKind::Alias => "Aliases",
            DeclKind::Attribute => "Attributes",
            DeclKind::File => "Files",
        }
    }
}

/// Whether an interface declaration is a generic or a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceKind {
    Generic,
    Port,
}

/// Port mode of an interface declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    In,
    Out,
    Inout,
    Buffer,
}

/// Procedure vs function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubProgramKind {
    Procedure,
    Function,
}

/// `for ... generate` vs `if ... generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerateKind {
    For,
    If,
}

/// A borrowed, kind-tagged reference to any AST node a container can hand
/// out as a child. This is what visibility filtering dispatches over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Declaration(&'a DeclarativeItem),
    Interface(&'a InterfaceDeclaration),
    Statement(&'a ConcurrentStatement),
    Range(&'a RangeConstraint),
}
