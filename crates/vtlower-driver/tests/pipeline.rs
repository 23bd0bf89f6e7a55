//! End-to-end translation of the Shape/Circle bundle.

use std::path::{Path, PathBuf};
use vtlower_common::{TranslateError, TranslatorConfig};
use vtlower_driver::{BundleFrontend, Translator};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shapes.json")
}

fn translator(config: TranslatorConfig) -> Translator<BundleFrontend> {
    let frontend = BundleFrontend::from_file(&fixture()).expect("Failed to load bundle");
    Translator::new(frontend, config)
}

#[test]
fn test_header_nests_packages() {
    let text = translator(TranslatorConfig::default()).header_text().unwrap();

    assert!(text.contains("namespace inputs {\n\n    namespace test001 {\n\n"));
    assert!(text.contains("        typedef __Circle* Circle;\n"));
    assert!(text.contains("            static void main(__rt::Array<String> args);\n"));
    assert!(text.contains("              getId((int32_t(*)(Circle)) &__Shape::getId)\n"));
}

#[test]
fn test_implementation_prints_lowered_bodies() {
    let text = translator(TranslatorConfig::default()).implementation_text().unwrap();

    assert!(text.starts_with("#include <iostream>\n#include \"output.h\"\n"));
    assert!(text.contains("        int32_t __Shape::count = 0;\n"));
    assert!(text.contains(concat!(
        "        Shape __Shape::__init(Shape __this, int32_t id) {\n",
        "            __this->id = id;\n",
        "            return __this;\n",
        "        }\n",
    )));
    assert!(text.contains(concat!(
        "        int32_t __Circle::area(Circle __this) {\n",
        "            return __this->r * __this->r;\n",
        "        }\n",
    )));
    assert!(text.contains("            Circle c = __Circle::__init(new __Circle(), 1, 2);\n"));
    assert!(text.contains(
        "            std::cout << __rt::literal(\"area: \") << c->__vptr->area(c) << std::endl;\n"
    ));
    assert!(text.contains(
        "            static Class k = new __Class(__rt::literal(\"inputs.test001.Circle\"), __Shape::__class());\n"
    ));
    assert!(text.contains("        __Test001_VT __Test001::__vtable;\n"));
    assert!(!text.contains("package"));
}

#[test]
fn test_stage_asts() {
    let t = translator(TranslatorConfig::default());
    assert_eq!(t.units().unwrap().len(), 1);
    assert_eq!(t.hierarchy().unwrap().classes.len(), 3);
    assert_eq!(t.lowered_ast().unwrap().len(), 1);
    assert_eq!(t.header_ast().unwrap().name, "CompilationUnit");
}

#[test]
fn test_run_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TranslatorConfig::default();
    config.output.dir = dir.path().to_path_buf();
    config.entry.main_class = Some("Test001".to_string());

    let written = translator(config).run().unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["output.h", "output.cpp", "main.cpp"]);

    let main = std::fs::read_to_string(dir.path().join("main.cpp")).unwrap();
    assert!(main.contains("    inputs::test001::__Test001::main(args);\n"));
    let header = std::fs::read_to_string(dir.path().join("output.h")).unwrap();
    assert!(header.starts_with("#pragma once\n"));
}

#[test]
fn test_run_without_main_class_skips_entry_point() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TranslatorConfig::default();
    config.output.dir = dir.path().to_path_buf();

    let written = translator(config).run().unwrap();
    assert_eq!(written.len(), 2);
    assert!(!dir.path().join("main.cpp").exists());
}

#[test]
fn test_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TranslatorConfig::default();
    config.output.dir = dir.path().join("missing");

    let err = translator(config).print_header().unwrap_err();
    assert!(matches!(err, TranslateError::OutputUnavailable { .. }));
}

#[test]
fn test_print_entry_point_unknown_class() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TranslatorConfig::default();
    config.output.dir = dir.path().to_path_buf();

    let t = translator(config);
    assert!(matches!(
        t.print_entry_point("Nope").unwrap_err(),
        TranslateError::UnknownClass { .. }
    ));
    assert_eq!(t.print_entry_point("Test001").unwrap(), dir.path().join("main.cpp"));
}
