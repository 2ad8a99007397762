// Syntax model for VHDL design units
pub mod ast;

pub use ast::{
    Architecture, BlockStatement, ConcurrentStatement, DeclKind, DeclarativeItem, DesignFile,
    DesignUnit, Entity, GenerateKind, GenerateStatement, InstantiatedUnit, InterfaceDeclaration,
    InterfaceKind, NodeRef, ObjectDeclaration, PackageBody, PackageDecl, PortDirection,
    RangeConstraint, SequentialProcess, SignalAssignment, SubProgram, SubProgramKind,
};

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};
