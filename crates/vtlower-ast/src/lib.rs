//! Tagged AST and class signature model.
//!
//! Every tree the translator touches, parsed or synthesized, is built from the
//! single generic [`Node`] type: a kind tag plus ordered positional slots.
//! Behavior is selected by matching [`NodeKind`], never by node type.

mod build;
mod kind;
mod node;
mod parents;
mod signature;

pub use build::{
    declarator, field_declaration, formal_parameter, formal_parameters, modifiers, type_node,
};
pub use kind::NodeKind;
pub use node::{Child, Node};
pub use parents::ParentIndex;
pub use signature::{
    ClassMap, ClassSignature, ConstructorSignature, FieldSignature, Hierarchy, MethodSignature,
};
