// Integration tests for coffeedoc

use coffeedoc::{
    document_module, Config, Documenter, Error, JavaScriptParser, JsonAstParser, Layout,
    ModuleDoc,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixtures_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_path(name)).expect("Failed to read fixture")
}

// Helper to document a JavaScript fixture with the default config
fn document_js(name: &str) -> ModuleDoc {
    let mut parser = JavaScriptParser::new().expect("Failed to create parser");
    document_module(&read_fixture(name), &mut parser, &Layout::CommonJs)
        .expect("Documentation failed")
}

// ============================================================================
// JavaScript Tests
// ============================================================================

#[test]
fn test_module_docstring() {
    let doc = document_js("shapes.js");
    assert_eq!(
        doc.docstring.as_deref(),
        Some("Geometry helpers\n================\nShapes and area functions.")
    );
}

#[test]
fn test_dependencies() {
    let doc = document_js("shapes.js");
    let deps: Vec<(&str, &str)> = doc
        .deps
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        deps,
        vec![
            ("exports.config", "../config"),
            ("path", "path"),
            ("util", "./util"),
        ]
    );
}

#[test]
fn test_classes_in_declaration_order() {
    let doc = document_js("shapes.js");
    assert_eq!(doc.classes.len(), 2);

    let shape = &doc.classes[0];
    assert_eq!(shape.name, "Shape");
    assert_eq!(shape.parent, None);
    assert_eq!(
        shape.docstring.as_deref(),
        Some("Base class for shapes.\n  - subclasses override area")
    );
    assert_eq!(shape.methods.len(), 1);

    let square = &doc.classes[1];
    assert_eq!(square.name, "Square");
    assert_eq!(square.parent.as_deref(), Some("Shape"));
    assert_eq!(square.docstring, None);
    let methods: Vec<&str> = square.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["constructor", "area"]);

    let constructor = square.method("constructor").expect("constructor");
    assert_eq!(constructor.docstring.as_deref(), Some("Build a square"));
    assert_eq!(constructor.params, vec!["side"]);
}

#[test]
fn test_functions() {
    let doc = document_js("shapes.js");
    assert_eq!(doc.functions.len(), 1);

    let total = &doc.functions[0];
    assert_eq!(total.name, "total");
    assert_eq!(total.docstring.as_deref(), Some("Sum the areas of all shapes."));
    assert_eq!(total.params, vec!["first", "shapes..."]);
    assert_eq!(total.signature(), "total(first, shapes...)");
}

#[test]
fn test_deterministic_output() {
    assert_eq!(document_js("shapes.js"), document_js("shapes.js"));
}

#[test]
fn test_no_docstrings_without_comments() {
    let source = "const a = require('a');\nclass A {}\nfunction f(x) { return x; }\n";
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = document_module(source, &mut parser, &Layout::CommonJs).unwrap();

    assert_eq!(doc.docstring, None);
    assert_eq!(doc.classes[0].docstring, None);
    assert!(doc.classes[0].methods.is_empty());
    assert_eq!(doc.functions[0].docstring, None);
}

#[test]
fn test_unrecognized_require_shapes_ignored() {
    let source = "const a = require(`${base}/a`);\nconst b = require(dir + ('/x' + '/y'));\nconst c = require('c');\n";
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = document_module(source, &mut parser, &Layout::CommonJs).unwrap();

    assert_eq!(doc.deps.len(), 1);
    assert_eq!(doc.deps.get("c").map(String::as_str), Some("c"));
}

#[test]
fn test_subscript_exports_documented() {
    let source = "const fs = require('fs');\nexports['run'] = function (a) {};\nexports[name] = function () {};\nfunction ok(b) {}\n";
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = document_module(source, &mut parser, &Layout::CommonJs).unwrap();

    assert_eq!(doc.deps.get("fs").map(String::as_str), Some("fs"));
    let names: Vec<&str> = doc.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["exports.run", "ok"]);
    assert_eq!(doc.functions[0].params, vec!["a"]);
}

#[test]
fn test_export_default_class() {
    let source = "const fs = require('fs');\nexport default class extends Base {}\nfunction ok(b) {}\n";
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = document_module(source, &mut parser, &Layout::CommonJs).unwrap();

    assert_eq!(doc.deps.len(), 1);
    assert_eq!(doc.classes.len(), 1);
    assert_eq!(doc.classes[0].name, "default");
    assert_eq!(doc.classes[0].parent.as_deref(), Some("Base"));
    assert_eq!(doc.functions.len(), 1);
    assert_eq!(doc.functions[0].name, "ok");
}

#[test]
fn test_syntax_error_fails() {
    let mut parser = JavaScriptParser::new().unwrap();
    let result = document_module("class {", &mut parser, &Layout::CommonJs);
    assert!(matches!(result, Err(Error::Parse(_))));
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_requirejs_layout() {
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = document_module(&read_fixture("widget.js"), &mut parser, &Layout::RequireJs)
        .expect("Documentation failed");

    assert_eq!(doc.docstring, None);
    assert_eq!(doc.classes.len(), 1);
    assert_eq!(doc.classes[0].name, "Widget");
    assert_eq!(doc.functions.len(), 1);
    assert_eq!(doc.functions[0].name, "render");
    assert_eq!(doc.functions[0].docstring.as_deref(), Some("Draw into el"));
    assert_eq!(doc.functions[0].params, vec!["el", "options"]);
}

#[test]
fn test_commonjs_layout_ignores_define_body() {
    let doc = document_js("widget.js");
    assert!(doc.classes.is_empty());
    assert!(doc.functions.is_empty());
}

#[test]
fn test_layout_from_config() {
    let config = Config::from_toml_str("[extract]\nlayout = \"requirejs\"\n").unwrap();
    let documenter = Documenter::new(config);
    let mut parser = JavaScriptParser::new().unwrap();
    let doc = documenter
        .document(&read_fixture("widget.js"), &mut parser)
        .unwrap();
    assert_eq!(doc.functions.len(), 1);
}

// ============================================================================
// JSON AST Tests
// ============================================================================

#[test]
fn test_json_ast_module() {
    let mut parser = JsonAstParser::new();
    let doc = document_module(&read_fixture("logger.json"), &mut parser, &Layout::CommonJs)
        .expect("Documentation failed");

    assert_eq!(doc.docstring.as_deref(), Some("Logger module\n  with levels\n"));
    assert_eq!(doc.deps.get("fs").map(String::as_str), Some("fs"));

    let logger = doc.class("Logger").expect("Logger class");
    assert_eq!(logger.parent.as_deref(), Some("events.EventEmitter"));
    assert_eq!(logger.docstring.as_deref(), Some("Writes lines"));
    assert_eq!(logger.methods[0].params, vec!["line"]);

    let log = doc.function("exports.log").expect("exports.log function");
    assert_eq!(log.docstring.as_deref(), Some("Log a message"));
    assert_eq!(log.params, vec!["msg", "rest..."]);
}

#[test]
fn test_output_serializes() {
    let doc = document_js("shapes.js");
    let json = serde_json::to_value(&doc).expect("serialize");
    assert_eq!(json["functions"][0]["name"], "total");
    assert_eq!(json["deps"]["util"], "./util");
    assert!(json["docstring"].is_string());
}
