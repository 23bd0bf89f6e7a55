//! Object layout synthesis.
//!
//! Given a resolved class hierarchy, this crate produces the lowered
//! declaration AST of every class:
//! - instance layout with inherited fields (`DataLayout`)
//! - dispatch tables (`VTableLayout`)
//! - the header compilation unit wrapping them (`HeaderBuilder`)
//! - per-class runtime support and the entry point (`class_support`, `entry_point_ast`)
//!
//! # Architecture
//!
//! ```text
//! ClassMap → DataLayout / VTableLayout per class → header CompilationUnit
//! ```

mod ancestry;
mod data_layout;
mod header;
mod support;
mod vtable;

pub use ancestry::{ancestry, hierarchy_order};
pub use data_layout::{synthesize, DataLayout};
pub use header::{wrap_in_namespaces, HeaderBuilder};
pub use support::{class_support, entry_point_ast, qualified_name};
pub use vtable::{VTableLayout, VTableSlot};

/// Prefix marking a lowered aggregate (`__Shape`).
pub const STRUCT_PREFIX: &str = "__";

/// Name of the lowered struct of `class_name`.
pub fn struct_name(class_name: &str) -> String {
    format!("{STRUCT_PREFIX}{class_name}")
}

/// Name of the dispatch table struct of `class_name`.
pub fn vtable_name(class_name: &str) -> String {
    format!("{STRUCT_PREFIX}{class_name}_VT")
}
