//! Lowered AST to C++ source text.
//!
//! One printer instance renders one tree in one [`PrintMode`]. Dispatch is by
//! [`NodeKind`]; kinds without a dedicated rule are traversed for their node
//! children. Statement printers write their own indentation and line end,
//! expression printers write inline.

use crate::types::{qualified_text, struct_path, struct_text, type_text};
use smol_str::SmolStr;
use vtlower_ast::{Child, Node, NodeKind, ParentIndex};
use vtlower_common::{Result, TranslateError, TranslatorConfig, ROOT_SENTINEL, SELF_IDENT};

/// Which artifact a print call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Declarations only; `static` modifiers are emitted.
    Header,
    /// Out-of-line member definitions and class metadata.
    Implementation,
    /// The `main` wrapper.
    EntryPoint,
}

/// C++ printer over a single tree.
pub struct CppPrinter<'a> {
    config: &'a TranslatorConfig,
    mode: PrintMode,
    root: &'a Node,
    parents: ParentIndex<'a>,
    output: String,
    indent: usize,
    /// Class whose members are being defined out of line.
    scope: Option<SmolStr>,
}

impl<'a> CppPrinter<'a> {
    pub fn new(config: &'a TranslatorConfig, mode: PrintMode, root: &'a Node) -> Self {
        Self {
            config,
            mode,
            root,
            parents: ParentIndex::build(root),
            output: String::new(),
            indent: 0,
            scope: None,
        }
    }

    /// Render the whole tree, preamble first.
    pub fn print(mut self) -> Result<String> {
        self.preamble();
        let root = self.root;
        self.visit(root)?;
        Ok(self.output)
    }

    fn preamble(&mut self) {
        let runtime = &self.config.runtime;
        let using = format!("using namespace {};", runtime.namespace);
        let header = format!("#include \"{}\"", self.config.output.header);
        match self.mode {
            PrintMode::Header => {
                let include = format!("#include \"{}\"", runtime.header);
                self.writeln("#pragma once");
                self.writeln("");
                self.writeln(&include);
                self.writeln("");
            }
            PrintMode::Implementation => {
                self.writeln("#include <iostream>");
                self.writeln(&header);
                self.writeln("");
            }
            PrintMode::EntryPoint => {
                self.writeln(&header);
                self.writeln("");
            }
        }
        self.writeln(&using);
        self.writeln("");
    }

    // ----- Dispatch -----

    /// Print any node at statement or declaration level.
    fn visit(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            NodeKind::CompilationUnit
            | NodeKind::ClassBody
            | NodeKind::ForwardDeclarations
            | NodeKind::TypeSpecifiers => {
                self.visit_children(node)?;
                if matches!(node.kind(), NodeKind::ForwardDeclarations | NodeKind::TypeSpecifiers) {
                    self.writeln("");
                }
                Ok(())
            }
            NodeKind::PackageDeclaration | NodeKind::ImportDeclaration => Ok(()),
            NodeKind::Modifiers | NodeKind::Modifier => Ok(()),
            NodeKind::NamespaceDeclaration => self.namespace(node),
            NodeKind::ForwardDeclaration => {
                let line = format!("{} {};", node.text(0, "keyword")?, node.text(1, "name")?);
                self.writeln(&line);
                Ok(())
            }
            NodeKind::TypeSpecifier => {
                let line = format!(
                    "{} {} {};",
                    node.text(0, "keyword")?,
                    node.text(1, "target type")?,
                    node.text(2, "alias")?
                );
                self.writeln(&line);
                Ok(())
            }
            NodeKind::ClassDeclaration => self.class_declaration(node),
            NodeKind::VTableDeclaration => self.vtable_declaration(node),
            NodeKind::FieldDeclaration => self.field_declaration(node),
            NodeKind::ConstructorDeclaration => self.constructor_declaration(node),
            NodeKind::MethodDeclaration => self.method_declaration(node),
            NodeKind::MainMethodDefinition => self.main_method_definition(node),
            NodeKind::ClassMethodDefinition => self.class_method_definition(node),
            kind if kind.is_statement() => self.statement(node),
            NodeKind::Unknown => {
                tracing::warn!(name = %node.name, "no print rule for node, visiting children");
                self.visit_children(node)
            }
            _ => {
                // An expression in declaration position.
                self.write("");
                self.expression(node)?;
                self.push("\n");
                Ok(())
            }
        }
    }

    fn visit_children(&mut self, node: &Node) -> Result<()> {
        for child in node.nodes() {
            self.visit(child)?;
        }
        Ok(())
    }

    // ----- Declarations -----

    fn namespace(&mut self, node: &Node) -> Result<()> {
        let open = format!("namespace {} {{", node.text(0, "name")?);
        self.writeln(&open);
        self.writeln("");
        self.indent += 1;
        self.visit_children(node)?;
        self.indent -= 1;
        self.writeln("}");
        self.writeln("");
        Ok(())
    }

    fn class_declaration(&mut self, node: &Node) -> Result<()> {
        let name = node.text(1, "class name")?;
        let body = node.node(5, "class body")?;
        match self.mode {
            PrintMode::Header => {
                self.writeln(&format!("struct {} {{", struct_path(name)));
                self.indent += 1;
                self.visit(body)?;
                self.indent -= 1;
                self.writeln("};");
                self.writeln("");
            }
            PrintMode::Implementation => {
                let outer = self.scope.replace(SmolStr::new(name));
                self.visit(body)?;
                self.scope = outer;
            }
            PrintMode::EntryPoint => {}
        }
        Ok(())
    }

    /// `struct __C_VT` with one function pointer per slot and a constructor
    /// binding every slot to its implementation.
    fn vtable_declaration(&mut self, node: &Node) -> Result<()> {
        if self.mode != PrintMode::Header {
            return Ok(());
        }
        let class = node.text(0, "class name")?;
        let entries = node.node(1, "vtable entries")?;
        let struct_name = struct_path(class);
        let table = format!("{struct_name}_VT");

        let mut members = Vec::new();
        let mut initializers = vec![format!("__is_a({struct_name}::__class())")];
        for entry in entries.nodes() {
            let ret = type_text(entry.node(0, "return type")?, &self.config.runtime)?;
            let name = entry.text(1, "slot name")?;
            let params = entry
                .node(2, "parameter types")?
                .nodes()
                .map(|ty| type_text(ty, &self.config.runtime))
                .collect::<Result<Vec<_>>>()?
                .join(", ");
            let implementor = entry.text(3, "implementing class")?;

            members.push(format!("{ret} (*{name})({params});"));
            if implementor == class {
                initializers.push(format!("{name}(&{struct_name}::{name})"));
            } else {
                initializers.push(format!(
                    "{name}(({ret}(*)({params})) &{}::{name})",
                    struct_path(implementor)
                ));
            }
        }

        self.writeln(&format!("struct {table} {{"));
        self.indent += 1;
        self.writeln("Class __is_a;");
        for member in &members {
            self.writeln(member);
        }
        self.writeln("");
        self.writeln(&format!("{table}()"));
        for (i, init) in initializers.iter().enumerate() {
            let lead = if i == 0 { ": " } else { "  " };
            let tail = if i + 1 < initializers.len() { "," } else { "" };
            self.writeln(&format!("{lead}{init}{tail}"));
        }
        self.writeln("{");
        self.writeln("}");
        self.indent -= 1;
        self.writeln("};");
        self.writeln("");
        Ok(())
    }

    fn is_member(&self, node: &Node) -> bool {
        self.parents
            .parent_of(node)
            .is_some_and(|parent| parent.is(NodeKind::ClassBody))
    }

    fn field_declaration(&mut self, node: &Node) -> Result<()> {
        if !self.is_member(node) {
            self.write("");
            self.local_declaration(node)?;
            self.push(";\n");
            return Ok(());
        }

        let is_static = has_static(node.opt_node(0, "modifiers")?);
        let ty = type_text(node.node(1, "field type")?, &self.config.runtime)?;
        let declarators = node.node(2, "declarators")?;
        match self.mode {
            PrintMode::Header => {
                let names = declarators
                    .nodes()
                    .map(|d| d.text(0, "declarator name").map(str::to_string))
                    .collect::<Result<Vec<_>>>()?
                    .join(", ");
                let prefix = if is_static { "static " } else { "" };
                self.writeln(&format!("{prefix}{ty} {names};"));
            }
            PrintMode::Implementation if is_static => {
                let scope = self.scope_name()?;
                for declarator in declarators.nodes() {
                    self.write(&format!("{ty} {scope}::"));
                    self.declarator(declarator)?;
                    self.push(";\n");
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// `T a = x, b` without terminator.
    fn local_declaration(&mut self, node: &Node) -> Result<()> {
        let ty = type_text(node.node(1, "variable type")?, &self.config.runtime)?;
        self.push(&ty);
        self.push(" ");
        self.declarators(node.node(2, "declarators")?)
    }

    fn declarators(&mut self, node: &Node) -> Result<()> {
        for (i, declarator) in node.nodes().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.declarator(declarator)?;
        }
        Ok(())
    }

    fn declarator(&mut self, node: &Node) -> Result<()> {
        self.push(node.text(0, "declarator name")?);
        if let Some(init) = node.opt_node(2, "initializer")? {
            self.push(" = ");
            self.expression(init)?;
        }
        Ok(())
    }

    fn constructor_declaration(&mut self, node: &Node) -> Result<()> {
        if self.mode != PrintMode::Header {
            return Ok(());
        }
        let name = struct_path(node.text(2, "constructor name")?);
        let params = match node.opt_node(3, "parameters")? {
            Some(params) => self.formal_parameters(params)?,
            None => "()".to_string(),
        };
        self.write(&format!("{name}{params}"));

        if let Some(inits) = node.opt_node(4, "initializations")? {
            let list = inits
                .nodes()
                .map(|init| {
                    Ok(format!(
                        "{}({})",
                        init.text(0, "initialized member")?,
                        init.text(1, "initial value")?
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            if !list.is_empty() {
                self.push(" : ");
                self.push(&list.join(", "));
            }
        }

        match node.opt_node(5, "constructor body")? {
            Some(body) => {
                self.push(" ");
                self.block(body)?;
                self.push("\n");
            }
            None => self.push(";\n"),
        }
        self.writeln("");
        Ok(())
    }

    fn method_declaration(&mut self, node: &Node) -> Result<()> {
        let ret = type_text(node.node(2, "return type")?, &self.config.runtime)?;
        let name = node.text(3, "method name")?;
        let params = self.formal_parameters(node.node(4, "parameters")?)?;
        let body = node.opt_node(7, "method body")?;

        match self.mode {
            PrintMode::Header => {
                let prefix = if has_static(node.opt_node(0, "modifiers")?) { "static " } else { "" };
                self.writeln(&format!("{prefix}{ret} {name}{params};"));
            }
            PrintMode::Implementation => {
                let Some(body) = body else { return Ok(()) };
                let scope = self.scope_name()?;
                self.write(&format!("{ret} {scope}::{name}{params} "));
                self.block(body)?;
                self.push("\n");
                self.writeln("");
            }
            PrintMode::EntryPoint => {}
        }
        Ok(())
    }

    /// `(T a, U b)`.
    fn formal_parameters(&self, node: &Node) -> Result<String> {
        let params = node
            .nodes()
            .map(|param| {
                let ty = type_text(param.node(1, "parameter type")?, &self.config.runtime)?;
                Ok(format!("{ty} {}", param.text(3, "parameter name")?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", params.join(", ")))
    }

    fn scope_name(&self) -> Result<String> {
        self.scope
            .as_deref()
            .map(struct_path)
            .ok_or_else(|| TranslateError::UnexpectedKind {
                expected: "a member inside a class declaration",
                found: "member outside any class".to_string(),
            })
    }

    // ----- Generated definitions -----

    fn main_method_definition(&mut self, node: &Node) -> Result<()> {
        let location = struct_path(node.text(0, "main class location")?);
        let runtime = &self.config.runtime;
        let args = format!(
            "{}<String> args = new {}<String>(argc - 1);",
            runtime.array_type, runtime.array_template
        );
        let fill = format!("(*args)[i - 1] = {}(argv[i]);", runtime.literal);

        self.writeln("int main(int argc, char* argv[]) {");
        self.indent += 1;
        self.writeln(&args);
        self.writeln("");
        self.writeln("for (int32_t i = 1; i < argc; i++) {");
        self.indent += 1;
        self.writeln(&fill);
        self.indent -= 1;
        self.writeln("}");
        self.writeln("");
        self.writeln(&format!("{location}::main(args);"));
        self.writeln("");
        self.writeln("return 0;");
        self.indent -= 1;
        self.writeln("}");
        Ok(())
    }

    /// `__class()` accessor and vtable storage of one class.
    fn class_method_definition(&mut self, node: &Node) -> Result<()> {
        if self.mode == PrintMode::Header {
            return Ok(());
        }
        let qualified = node.text(0, "qualified class name")?;
        let parent = node.text(1, "parent class name")?;
        let simple = qualified.rsplit('.').next().unwrap_or(qualified);
        let name = struct_path(simple);
        let parent_class = if parent == ROOT_SENTINEL {
            "__Object::__class()".to_string()
        } else {
            format!("{}::__class()", struct_path(parent))
        };

        self.writeln(&format!("Class {name}::__class() {{"));
        self.indent += 1;
        self.writeln(&format!(
            "static Class k = new __Class({}(\"{qualified}\"), {parent_class});",
            self.config.runtime.literal
        ));
        self.writeln("return k;");
        self.indent -= 1;
        self.writeln("}");
        self.writeln("");
        self.writeln(&format!("{name}_VT {name}::__vtable;"));
        self.writeln("");
        Ok(())
    }

    // ----- Statements -----

    fn statement(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            NodeKind::Block => {
                self.write("");
                self.block(node)?;
                self.push("\n");
            }
            NodeKind::ExpressionStatement => {
                let expr = node.node(0, "expression")?;
                self.write("");
                self.expression(expr)?;
                self.terminate_unless_cblock(expr);
                self.push("\n");
            }
            NodeKind::ReturnStatement => {
                self.write("return");
                if let Some(value) = node.children.first().and_then(Child::as_node) {
                    self.push(" ");
                    self.expression(value)?;
                    self.terminate_unless_cblock(value);
                } else {
                    self.push(";");
                }
                self.push("\n");
            }
            NodeKind::ConditionalStatement => {
                self.write("");
                self.conditional(node)?;
                self.push("\n");
            }
            NodeKind::WhileStatement => {
                self.write("while (");
                self.expression(node.node(0, "loop condition")?)?;
                self.push(") ");
                self.branch(node.node(1, "loop body")?)?;
                self.push("\n");
            }
            NodeKind::ForStatement => {
                self.write("for (");
                self.for_control(node.node(0, "loop control")?)?;
                self.push(") ");
                self.branch(node.node(1, "loop body")?)?;
                self.push("\n");
            }
            NodeKind::BreakStatement => self.writeln("break;"),
            NodeKind::ContinueStatement => self.writeln("continue;"),
            NodeKind::EmptyStatement => self.writeln(";"),
            NodeKind::FieldDeclaration => return self.field_declaration(node),
            _ => {
                return Err(TranslateError::UnexpectedKind {
                    expected: "a statement",
                    found: node.name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn terminate_unless_cblock(&mut self, expr: &Node) {
        if !expr.is(NodeKind::CBlock) {
            self.push(";");
        }
    }

    /// `{`, statements one level deeper, `}` at the current level.
    fn block(&mut self, node: &Node) -> Result<()> {
        if node.is_empty() {
            self.push("{}");
            return Ok(());
        }
        self.push("{\n");
        self.indent += 1;
        for statement in node.nodes() {
            self.visit(statement)?;
        }
        self.indent -= 1;
        self.write("}");
        Ok(())
    }

    /// Loop and branch bodies always print braced.
    fn branch(&mut self, node: &Node) -> Result<()> {
        if node.is(NodeKind::Block) {
            return self.block(node);
        }
        self.push("{\n");
        self.indent += 1;
        self.visit(node)?;
        self.indent -= 1;
        self.write("}");
        Ok(())
    }

    fn conditional(&mut self, node: &Node) -> Result<()> {
        self.push("if (");
        self.expression(node.node(0, "condition")?)?;
        self.push(") ");
        self.branch(node.node(1, "consequence")?)?;
        if let Some(alternative) = node.children.get(2).and_then(Child::as_node) {
            self.push(" else ");
            if alternative.is(NodeKind::ConditionalStatement) {
                self.conditional(alternative)?;
            } else {
                self.branch(alternative)?;
            }
        }
        Ok(())
    }

    /// `init; condition; update` of a basic for loop.
    fn for_control(&mut self, node: &Node) -> Result<()> {
        match node.opt_node(1, "variable type")? {
            Some(ty) => {
                let ty = type_text(ty, &self.config.runtime)?;
                self.push(&ty);
                self.push(" ");
                self.declarators(node.node(2, "declarators")?)?;
            }
            None => {
                if let Some(init) = node.opt_node(2, "initializer")? {
                    self.expression(init)?;
                }
            }
        }
        self.push(";");
        if let Some(condition) = node.opt_node(3, "condition")? {
            self.push(" ");
            self.expression(condition)?;
        }
        self.push(";");
        if let Some(update) = node.opt_node(4, "update")? {
            self.push(" ");
            self.expression(update)?;
        }
        Ok(())
    }

    // ----- Expressions -----

    fn expression(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            kind if kind.is_binary() => {
                self.expression(node.node(0, "left operand")?)?;
                self.push(&format!(" {} ", node.text(1, "operator")?));
                self.expression(node.node(2, "right operand")?)?;
            }
            NodeKind::ConditionalExpression => {
                self.expression(node.node(0, "condition")?)?;
                self.push(" ? ");
                self.expression(node.node(1, "consequence")?)?;
                self.push(" : ");
                self.expression(node.node(2, "alternative")?)?;
            }
            NodeKind::PrefixExpression => {
                self.push(node.text(1, "operator")?);
                self.expression(node.node(0, "operand")?)?;
            }
            NodeKind::PostfixExpression => {
                self.expression(node.node(0, "operand")?)?;
                self.push(node.text(1, "operator")?);
            }
            NodeKind::UnaryExpression => {
                self.push(node.text(0, "operator")?);
                self.expression(node.node(1, "operand")?)?;
            }
            NodeKind::LogicalNegationExpression => {
                self.push("!");
                self.expression(node.node(0, "operand")?)?;
            }
            NodeKind::CastExpression => {
                let ty = type_text(node.node(0, "cast type")?, &self.config.runtime)?;
                self.push(&format!("({ty}) "));
                self.expression(node.node(1, "cast operand")?)?;
            }
            NodeKind::ThisExpression => self.push(SELF_IDENT),
            NodeKind::PrimaryIdentifier => self.push(node.text(0, "identifier")?),
            NodeKind::QualifiedIdentifier => self.push(&qualified_text(node)?),
            NodeKind::Type | NodeKind::VoidType | NodeKind::PrimitiveType => {
                self.push(&type_text(node, &self.config.runtime)?)
            }
            NodeKind::SelectionExpression => {
                self.expression(node.node(0, "selected object")?)?;
                self.push("->");
                self.push(node.text(1, "field name")?);
            }
            NodeKind::StaticSelectionExpression => {
                self.push(&struct_text(node.node(0, "class")?)?);
                self.push("::");
                self.push(node.text(1, "field name")?);
            }
            NodeKind::SubscriptExpression => {
                self.push("(*");
                self.expression(node.node(0, "array")?)?;
                self.push(")[");
                self.expression(node.node(1, "index")?)?;
                self.push("]");
            }
            NodeKind::CallExpression => {
                if let Some(receiver) = node.opt_node(0, "receiver")? {
                    self.expression(receiver)?;
                    self.push("->");
                }
                self.push(node.text(2, "method name")?);
                self.expression(node.node(3, "arguments")?)?;
            }
            NodeKind::StaticCallExpression => {
                if let Some(class) = node.opt_node(0, "class")? {
                    self.push(&struct_text(class)?);
                    self.push("::");
                }
                self.push(node.text(2, "method name")?);
                self.expression(node.node(3, "arguments")?)?;
            }
            NodeKind::Arguments => {
                self.push("(");
                self.comma_separated(node)?;
                self.push(")");
            }
            NodeKind::ExpressionList => self.comma_separated(node)?,
            NodeKind::PrintingExpression => self.printing(node)?,
            NodeKind::NewClassExpression => {
                self.push(&struct_text(node.node(2, "class type")?)?);
                self.push("::__init");
                self.expression(node.node(3, "arguments")?)?;
            }
            NodeKind::CppNewClassExpression => {
                let class = struct_path(node.text(0, "class name")?);
                self.push(&format!("new {class}()"));
            }
            NodeKind::NewArrayExpression => self.new_array(node)?,
            NodeKind::NewCastExpression => {
                self.push(node.text(2, "cast prefix")?);
                self.expression(node.node(3, "cast operand")?)?;
            }
            NodeKind::CBlock => self.cblock(node)?,
            NodeKind::StringLiteral => {
                let literal = format!("{}({})", self.config.runtime.literal, node.text(0, "string")?);
                self.push(&literal);
            }
            NodeKind::NullLiteral => self.push("NULL"),
            NodeKind::IntegerLiteral
            | NodeKind::FloatingPointLiteral
            | NodeKind::CharacterLiteral
            | NodeKind::BooleanLiteral => self.push(node.text(0, "literal")?),
            NodeKind::Unknown => {
                tracing::warn!(name = %node.name, "no print rule for expression, visiting children");
                for child in node.nodes() {
                    self.expression(child)?;
                }
            }
            _ => {
                return Err(TranslateError::UnexpectedKind {
                    expected: "an expression",
                    found: node.name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn comma_separated(&mut self, node: &Node) -> Result<()> {
        for (i, item) in node.nodes().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.expression(item)?;
        }
        Ok(())
    }

    /// `std::cout << a << b`, with `<< std::endl` for `println`.
    fn printing(&mut self, node: &Node) -> Result<()> {
        self.push("std::cout");
        if let Some(items) = node.opt_node(0, "printed items")? {
            let items: Vec<&Node> = if items.is(NodeKind::ExpressionList) {
                items.nodes().collect()
            } else {
                vec![items]
            };
            for item in items {
                self.push(" << ");
                self.expression(item)?;
            }
        }
        if node.text(1, "print variant")? == "println" {
            self.push(" << std::endl");
        }
        Ok(())
    }

    /// `new __rt::__Array<__rt::__Array<T>>(d1)(d2)`.
    fn new_array(&mut self, node: &Node) -> Result<()> {
        let element = type_text(node.node(0, "element type")?, &self.config.runtime)?;
        let dims = node.node(1, "dimensions")?;
        let depth = dims.len();
        let template = format!("{}<", self.config.runtime.array_template);

        self.push("new ");
        self.push(&template.repeat(depth));
        self.push(&element);
        self.push(&">".repeat(depth));
        for dim in dims.nodes() {
            self.push("(");
            self.expression(dim)?;
            self.push(")");
        }
        Ok(())
    }

    /// `({ ... })`, terminated here when the enclosing statement sits
    /// directly in a block.
    fn cblock(&mut self, node: &Node) -> Result<()> {
        self.push("({\n");
        self.indent += 1;
        for statement in node.nodes() {
            self.visit(statement)?;
        }
        self.indent -= 1;
        self.write("})");
        let in_block = self
            .parents
            .grandparent_of(node)
            .is_some_and(|grandparent| grandparent.is(NodeKind::Block));
        if in_block {
            self.push(";");
        }
        Ok(())
    }

    // ----- Output -----

    /// Indented line; empty lines carry no indentation.
    fn writeln(&mut self, s: &str) {
        if !s.is_empty() {
            self.write(s);
        }
        self.output.push('\n');
    }

    /// Indentation followed by `s`.
    fn write(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
    }

    /// `s` at the current position.
    fn push(&mut self, s: &str) {
        self.output.push_str(s);
    }
}

fn has_static(modifiers: Option<&Node>) -> bool {
    modifiers.is_some_and(|mods| {
        mods.nodes()
            .any(|m| m.children.first().and_then(Child::as_text) == Some("static"))
    })
}
