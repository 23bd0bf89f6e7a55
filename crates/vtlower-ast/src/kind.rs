//! The closed set of node kinds the translator understands.

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $kind:ident),* $(,)?) => {
        /// Kind tag of a [`Node`](crate::Node), decoded from its name.
        ///
        /// Tags outside this set decode to [`NodeKind::Unknown`] so that
        /// consumers can fall back to generic traversal.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($(#[$doc])* $kind,)*
            /// Any tag not listed above.
            Unknown,
        }

        impl NodeKind {
            /// Decode a node name.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $(stringify!($kind) => NodeKind::$kind,)*
                    _ => NodeKind::Unknown,
                }
            }

            /// The canonical node name for this kind.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind),)*
                    NodeKind::Unknown => "Unknown",
                }
            }
        }
    };
}

node_kinds! {
    // Compilation structure
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    NamespaceDeclaration,
    ForwardDeclarations,
    ForwardDeclaration,
    TypeSpecifiers,
    TypeSpecifier,

    // Declarations
    ClassDeclaration,
    ClassBody,
    FieldDeclaration,
    ConstructorDeclaration,
    MethodDeclaration,
    Modifiers,
    Modifier,
    FormalParameters,
    FormalParameter,
    Declarators,
    Declarator,
    Initializations,
    Initialization,
    /// Dispatch table struct for one class.
    VTableDeclaration,
    VTableEntries,
    VTableEntry,
    ParameterTypes,

    // Types
    Type,
    VoidType,
    PrimitiveType,
    QualifiedIdentifier,
    Dimensions,

    // Statements
    Block,
    ExpressionStatement,
    ReturnStatement,
    ConditionalStatement,
    WhileStatement,
    ForStatement,
    BasicForControl,
    BreakStatement,
    ContinueStatement,
    EmptyStatement,

    // Expressions
    Expression,
    AdditiveExpression,
    MultiplicativeExpression,
    RelationalExpression,
    EqualityExpression,
    LogicalAndExpression,
    LogicalOrExpression,
    ConditionalExpression,
    PrefixExpression,
    PostfixExpression,
    UnaryExpression,
    LogicalNegationExpression,
    CastExpression,
    ThisExpression,
    PrimaryIdentifier,
    SelectionExpression,
    StaticSelectionExpression,
    SubscriptExpression,
    CallExpression,
    StaticCallExpression,
    Arguments,
    ExpressionList,
    PrintingExpression,
    NewClassExpression,
    CppNewClassExpression,
    NewArrayExpression,
    ConcreteDimensions,
    NewCastExpression,
    /// GNU statement-expression `({ ... })`.
    CBlock,

    // Literals
    IntegerLiteral,
    FloatingPointLiteral,
    StringLiteral,
    CharacterLiteral,
    BooleanLiteral,
    NullLiteral,

    // Translator-generated definitions
    MainMethodDefinition,
    ClassMethodDefinition,
}

impl NodeKind {
    /// Binary expression kinds printed as `lhs op rhs`.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            NodeKind::Expression
                | NodeKind::AdditiveExpression
                | NodeKind::MultiplicativeExpression
                | NodeKind::RelationalExpression
                | NodeKind::EqualityExpression
                | NodeKind::LogicalAndExpression
                | NodeKind::LogicalOrExpression
        )
    }

    /// Kinds that open a line of their own inside a block.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::ExpressionStatement
                | NodeKind::ReturnStatement
                | NodeKind::ConditionalStatement
                | NodeKind::WhileStatement
                | NodeKind::ForStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::EmptyStatement
                | NodeKind::FieldDeclaration
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in [NodeKind::CBlock, NodeKind::MethodDeclaration, NodeKind::VTableEntry] {
            assert_eq!(NodeKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unmodeled_names_are_unknown() {
        assert_eq!(NodeKind::from_name("LambdaExpression"), NodeKind::Unknown);
        assert_eq!(NodeKind::from_name(""), NodeKind::Unknown);
    }
}
