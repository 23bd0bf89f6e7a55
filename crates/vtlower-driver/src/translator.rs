//! The translation pipeline.

use crate::frontend::Frontend;
use std::path::PathBuf;
use tracing::info_span;
use vtlower_ast::{Hierarchy, Node, NodeKind};
use vtlower_common::{Result, TranslateError, TranslatorConfig};
use vtlower_layout::{class_support, entry_point_ast, hierarchy_order, wrap_in_namespaces, HeaderBuilder};
use vtlower_printer::{print_to_path, render, PrintMode};

/// Runs the pipeline for one set of sources.
///
/// Every public stage recomputes what it depends on from the frontend, so
/// each one can be requested on its own.
pub struct Translator<F> {
    frontend: F,
    config: TranslatorConfig,
}

impl<F: Frontend> Translator<F> {
    pub fn new(frontend: F, config: TranslatorConfig) -> Self {
        Self { frontend, config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Source units, primary first.
    pub fn units(&self) -> Result<Vec<Node>> {
        let _span = info_span!("ingest").entered();
        let units = self.frontend.ingest()?;
        tracing::info!(units = units.len(), "ingested sources");
        Ok(units)
    }

    pub fn hierarchy(&self) -> Result<Hierarchy> {
        let units = self.units()?;
        self.hierarchy_of(&units)
    }

    /// Header compilation unit.
    pub fn header_ast(&self) -> Result<Node> {
        let hierarchy = self.hierarchy()?;
        self.build_header(&hierarchy)
    }

    pub fn header_text(&self) -> Result<String> {
        let header = self.header_ast()?;
        self.render(PrintMode::Header, &header)
    }

    /// Write the header; returns its path.
    pub fn print_header(&self) -> Result<PathBuf> {
        let header = self.header_ast()?;
        self.write(PrintMode::Header, &header, self.config.header_path())
    }

    /// Lowered units as produced by the frontend.
    pub fn lowered_ast(&self) -> Result<Vec<Node>> {
        let units = self.units()?;
        let hierarchy = self.hierarchy_of(&units)?;
        self.lower(&units, &hierarchy)
    }

    /// Implementation compilation unit.
    pub fn implementation_ast(&self) -> Result<Node> {
        let units = self.units()?;
        let hierarchy = self.hierarchy_of(&units)?;
        let lowered = self.lower(&units, &hierarchy)?;
        build_implementation(&hierarchy, &lowered)
    }

    pub fn implementation_text(&self) -> Result<String> {
        let unit = self.implementation_ast()?;
        self.render(PrintMode::Implementation, &unit)
    }

    /// Write the implementation file; returns its path.
    pub fn print_implementation(&self) -> Result<PathBuf> {
        let unit = self.implementation_ast()?;
        self.write(PrintMode::Implementation, &unit, self.config.implementation_path())
    }

    /// Entry point forwarding to `main_class`.
    pub fn entry_point_text(&self, main_class: &str) -> Result<String> {
        let hierarchy = self.hierarchy()?;
        let unit = build_entry_point(&hierarchy, main_class)?;
        self.render(PrintMode::EntryPoint, &unit)
    }

    /// Write the entry point; returns its path.
    pub fn print_entry_point(&self, main_class: &str) -> Result<PathBuf> {
        let hierarchy = self.hierarchy()?;
        let unit = build_entry_point(&hierarchy, main_class)?;
        self.write(PrintMode::EntryPoint, &unit, self.config.entry_point_path())
    }

    /// Full pipeline: header, implementation and, when a main class is
    /// configured, the entry point. Returns the written paths.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let _span = info_span!("run", out = %self.config.output.dir.display()).entered();
        let units = self.units()?;
        let hierarchy = self.hierarchy_of(&units)?;

        let header = self.build_header(&hierarchy)?;
        let lowered = self.lower(&units, &hierarchy)?;
        let implementation = build_implementation(&hierarchy, &lowered)?;
        let entry_point = match &self.config.entry.main_class {
            Some(main_class) => Some(build_entry_point(&hierarchy, main_class)?),
            None => None,
        };

        let mut written = vec![
            self.write(PrintMode::Header, &header, self.config.header_path())?,
            self.write(PrintMode::Implementation, &implementation, self.config.implementation_path())?,
        ];
        if let Some(unit) = &entry_point {
            written.push(self.write(PrintMode::EntryPoint, unit, self.config.entry_point_path())?);
        }
        tracing::info!(files = written.len(), "translation finished");
        Ok(written)
    }

    fn hierarchy_of(&self, units: &[Node]) -> Result<Hierarchy> {
        let _span = info_span!("hierarchy").entered();
        let hierarchy = self.frontend.build_hierarchy(units)?;
        tracing::info!(
            classes = hierarchy.classes.len(),
            packages = hierarchy.packages.len(),
            "built class hierarchy"
        );
        Ok(hierarchy)
    }

    fn build_header(&self, hierarchy: &Hierarchy) -> Result<Node> {
        let _span = info_span!("layout").entered();
        HeaderBuilder::new(hierarchy).build()
    }

    fn lower(&self, units: &[Node], hierarchy: &Hierarchy) -> Result<Vec<Node>> {
        let _span = info_span!("lower").entered();
        self.frontend.lower(units, &hierarchy.classes)
    }

    fn render(&self, mode: PrintMode, root: &Node) -> Result<String> {
        let _span = info_span!("print", ?mode).entered();
        render(&self.config, mode, root)
    }

    fn write(&self, mode: PrintMode, root: &Node, path: PathBuf) -> Result<PathBuf> {
        let _span = info_span!("print", ?mode, path = %path.display()).entered();
        print_to_path(&self.config, mode, root, &path)?;
        Ok(path)
    }
}

/// Lowered declarations inside the package namespaces, followed by the
/// runtime support of every class.
fn build_implementation(hierarchy: &Hierarchy, lowered: &[Node]) -> Result<Node> {
    let mut members = Vec::new();
    for unit in lowered {
        if unit.is(NodeKind::CompilationUnit) {
            members.extend(
                unit.nodes()
                    .filter(|n| !matches!(n.kind(), NodeKind::PackageDeclaration | NodeKind::ImportDeclaration))
                    .cloned(),
            );
        } else {
            members.push(unit.clone());
        }
    }
    for class in hierarchy_order(&hierarchy.classes)? {
        members.push(class_support(class, &hierarchy.packages));
    }

    Ok(Node::with_nodes(
        "CompilationUnit",
        wrap_in_namespaces(&hierarchy.packages, members),
    ))
}

fn build_entry_point(hierarchy: &Hierarchy, main_class: &str) -> Result<Node> {
    if !hierarchy.classes.contains_key(main_class) {
        return Err(TranslateError::UnknownClass {
            class: main_class.to_string(),
        });
    }
    Ok(entry_point_ast(main_class, &hierarchy.packages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{BundleFrontend, TranslationBundle};
    use vtlower_ast::ClassSignature;

    fn translator(classes: Vec<ClassSignature>, lowered: Vec<Node>) -> Translator<BundleFrontend> {
        let bundle = TranslationBundle {
            packages: vec!["inputs".to_string()],
            classes,
            units: Vec::new(),
            lowered,
        };
        Translator::new(BundleFrontend::new(bundle), TranslatorConfig::default())
    }

    #[test]
    fn test_implementation_strips_package_and_imports() {
        let lowered = Node::with_nodes(
            "CompilationUnit",
            [
                Node::new("PackageDeclaration"),
                Node::new("ImportDeclaration"),
                Node::new("EmptyStatement"),
            ],
        );
        let t = translator(vec![ClassSignature::root("Test001")], vec![lowered]);
        let unit = t.implementation_ast().unwrap();

        let namespace = unit.node(0, "namespace").unwrap();
        let kinds: Vec<_> = namespace.nodes().map(Node::kind).collect();
        assert_eq!(kinds, [NodeKind::EmptyStatement, NodeKind::ClassMethodDefinition]);
    }

    #[test]
    fn test_entry_point_requires_known_class() {
        let t = translator(vec![ClassSignature::root("Test001")], vec![]);
        assert!(t.entry_point_text("Test001").unwrap().contains("inputs::__Test001::main(args);"));

        let err = t.entry_point_text("Missing").unwrap_err();
        assert!(matches!(err, TranslateError::UnknownClass { ref class } if class == "Missing"));
    }
}
