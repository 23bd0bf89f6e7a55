//! Type text resolution.
//!
//! Maps source type nodes onto the names the target runtime declares.

use vtlower_ast::{Node, NodeKind};
use vtlower_common::{Result, RuntimeConfig, TranslateError};

/// Fixed-width target name of a source primitive.
pub fn primitive_text(name: &str) -> &str {
    match name {
        "int" => "int32_t",
        "long" => "int64_t",
        "short" => "int16_t",
        "byte" => "int8_t",
        "boolean" => "bool",
        other => other,
    }
}

/// Segments of a `QualifiedIdentifier` joined with `::`.
pub fn qualified_text(node: &Node) -> Result<String> {
    let segments = node
        .children
        .iter()
        .enumerate()
        .map(|(index, _)| node.text(index, "identifier segment"))
        .collect::<Result<Vec<_>>>()?;
    Ok(segments.join("::"))
}

/// Target text of a `Type`, `VoidType`, `PrimitiveType` or `QualifiedIdentifier`.
pub fn type_text(node: &Node, runtime: &RuntimeConfig) -> Result<String> {
    match node.kind() {
        NodeKind::VoidType => Ok("void".to_string()),
        NodeKind::PrimitiveType => Ok(primitive_text(node.text(0, "primitive name")?).to_string()),
        NodeKind::QualifiedIdentifier => qualified_text(node),
        NodeKind::Type => {
            let mut text = type_text(node.node(0, "base type")?, runtime)?;
            let dims = node.opt_node(1, "dimensions")?.map_or(0, Node::len);
            for _ in 0..dims {
                text = format!("{}<{}>", runtime.array_type, text);
            }
            Ok(text)
        }
        _ => Err(TranslateError::UnexpectedKind {
            expected: "a type",
            found: node.name.to_string(),
        }),
    }
}

/// Name of the lowered struct a type or class reference denotes:
/// `pkg.Shape` becomes `pkg::__Shape`.
pub fn struct_text(node: &Node) -> Result<String> {
    let qualified = match node.kind() {
        NodeKind::Type => return struct_text(node.node(0, "base type")?),
        NodeKind::QualifiedIdentifier => qualified_text(node)?,
        NodeKind::PrimaryIdentifier => node.text(0, "name")?.to_string(),
        _ => {
            return Err(TranslateError::UnexpectedKind {
                expected: "a class reference",
                found: node.name.to_string(),
            })
        }
    };
    Ok(struct_path(&qualified))
}

/// Prefix the last `::` segment of `path` with `__`.
pub fn struct_path(path: &str) -> String {
    match path.rsplit_once("::") {
        Some((scope, name)) => format!("{scope}::__{name}"),
        None => format!("__{path}"),
    }
}
