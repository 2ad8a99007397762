//! VHDL AST node model consumed by the IDE layer.
//!
//! These types are produced by an external analyzer and read here; the
//! outline subsystem never mutates or owns individual nodes beyond the
//! snapshot as a whole.

pub mod enums;
pub mod types;

pub use enums::{
    ConcurrentStatement, DeclKind, DeclarativeItem, DesignUnit, GenerateKind, InterfaceKind,
    NodeRef, PortDirection, SubProgramKind,
};
pub use types::{
    Architecture, BlockStatement, DesignFile, Entity, GenerateStatement, InstantiatedUnit,
    InterfaceDeclaration, ObjectDeclaration, PackageBody, PackageDecl, RangeConstraint,
    SequentialProcess, SignalAssignment, SubProgram,
};
