//! C++ code emission for the vtlower translator.
//!
//! This crate provides:
//! - A recursive, context-sensitive printer over the tagged AST
//! - Type text resolution onto the target runtime's names
//! - Atomic output files
//!
//! # Architecture
//!
//! ```text
//! Node tree → CppPrinter (Header | Implementation | EntryPoint) → text → file
//! ```

mod printer;
mod sink;
mod types;

pub use printer::{CppPrinter, PrintMode};
pub use sink::write_atomic;
pub use types::{primitive_text, struct_path, type_text};

use std::path::Path;
use vtlower_ast::Node;
use vtlower_common::{Result, TranslatorConfig};

/// Render `root` in `mode`.
pub fn render(config: &TranslatorConfig, mode: PrintMode, root: &Node) -> Result<String> {
    CppPrinter::new(config, mode, root).print()
}

/// Render `root` in `mode` and write it to `path`.
///
/// Rendering completes before the file is touched, so a malformed tree
/// leaves any previous output in place.
pub fn print_to_path(config: &TranslatorConfig, mode: PrintMode, root: &Node, path: &Path) -> Result<()> {
    let text = render(config, mode, root)?;
    write_atomic(path, &text)
}
