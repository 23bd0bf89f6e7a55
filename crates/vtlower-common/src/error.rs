//! Error types for the vtlower translator.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for vtlower operations.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors that abort a translation run.
///
/// Every variant is fatal: they signal either a malformed upstream artifact
/// (hierarchy, AST shape) or an environment that cannot hold the output.
/// Unknown node kinds are not errors; the printer traverses them.
#[derive(Error, Diagnostic, Debug)]
pub enum TranslateError {
    /// A class names a parent that is neither in the class map nor the root sentinel.
    #[error("class `{class}` extends `{parent}`, which is not in the class map")]
    #[diagnostic(
        code(vtlower::layout::unresolved_parent),
        help("the hierarchy builder must register every ancestor before layout synthesis")
    )]
    UnresolvedParent { class: String, parent: String },

    /// Walking the parent chain revisited a class.
    #[error("inheritance cycle through class `{class}`")]
    #[diagnostic(code(vtlower::layout::cyclic_hierarchy))]
    CyclicHierarchy { class: String },

    /// A node is missing a positional slot its kind requires.
    #[error("`{kind}` node has no {what} at slot {index}")]
    #[diagnostic(
        code(vtlower::ast::arity),
        help("this indicates a bug in the stage that synthesized the node")
    )]
    Arity {
        kind: String,
        index: usize,
        what: &'static str,
    },

    /// A slot is present but holds the wrong shape of child.
    #[error("`{kind}` node slot {index} should hold {expected}")]
    #[diagnostic(code(vtlower::ast::slot_mismatch))]
    SlotMismatch {
        kind: String,
        index: usize,
        expected: &'static str,
    },

    /// A node of an unexpected kind appeared where a specific family is required.
    #[error("expected {expected}, found `{found}` node")]
    #[diagnostic(code(vtlower::ast::unexpected_kind))]
    UnexpectedKind { expected: &'static str, found: String },

    /// A class named by the caller is not part of the hierarchy.
    #[error("class `{class}` is not in the class map")]
    #[diagnostic(
        code(vtlower::driver::unknown_class),
        help("set `[entry] main_class` to a class declared in the translated sources")
    )]
    UnknownClass { class: String },

    /// The output sink could not be created or written.
    #[error("cannot write output to {}", path.display())]
    #[diagnostic(
        code(vtlower::output::unavailable),
        help("create the output directory or point `[output] dir` at a writable location")
    )]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an input file.
    #[error("failed to read input: {0}")]
    #[diagnostic(code(vtlower::io))]
    Io(#[from] std::io::Error),

    /// Failed to parse the TOML configuration.
    #[error("failed to parse configuration: {0}")]
    #[diagnostic(code(vtlower::config))]
    Config(#[from] toml::de::Error),

    /// Failed to decode a translation bundle.
    #[error("failed to decode translation bundle: {0}")]
    #[diagnostic(code(vtlower::bundle))]
    Bundle(#[from] serde_json::Error),
}

impl TranslateError {
    /// Missing-slot error for `kind`.
    pub fn arity(kind: impl Into<String>, index: usize, what: &'static str) -> Self {
        TranslateError::Arity {
            kind: kind.into(),
            index,
            what,
        }
    }

    /// Wrong-shape-slot error for `kind`.
    pub fn slot_mismatch(kind: impl Into<String>, index: usize, expected: &'static str) -> Self {
        TranslateError::SlotMismatch {
            kind: kind.into(),
            index,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_entity() {
        let err = TranslateError::UnresolvedParent {
            class: "Circle".to_string(),
            parent: "Shape".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class `Circle` extends `Shape`, which is not in the class map"
        );

        let err = TranslateError::arity("MethodDeclaration", 7, "body");
        assert_eq!(err.to_string(), "`MethodDeclaration` node has no body at slot 7");
    }

    #[test]
    fn test_output_error_names_location() {
        let err = TranslateError::OutputUnavailable {
            path: PathBuf::from("/missing/output.h"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing/output.h"));
    }
}
