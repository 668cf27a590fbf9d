//! Integration tests for the parsing module.
//!
//! Fixture-based snapshot tests: each `fixtures/<name>.jenkinsfile` is parsed,
//! checked against the tree invariants and snapshotted as a tree dump in
//! `fixtures/<name>.snap`.

use pretty_assertions::assert_eq;

use crate::document::Jenkinsfile;
use crate::parsing::{ParseMode, parse_document, snapshot};

// Fixture-based snapshot tests

#[test]
fn fixture_declarative_basic() {
    assert_fixture("declarative_basic");
}

#[test]
fn fixture_sh_block() {
    assert_fixture("sh_block");
}

#[test]
fn fixture_irregular_indent() {
    assert_fixture("irregular_indent");
}

#[test]
fn fixture_directives() {
    assert_fixture("directives");
}

fn fixtures_dir() -> String {
    format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.jenkinsfile", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let doc = Jenkinsfile::parse(&read_fixture(name)).unwrap();
    snapshot::invariants(&doc);

    let tree = snapshot::normalize(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, tree);
    });
}

// Rendering of fixtures

#[test]
fn blank_lines_are_dropped_on_render() {
    let doc = Jenkinsfile::parse(&read_fixture("declarative_basic")).unwrap();
    let rendered = doc.render();
    assert!(!rendered.contains("\n\n"));
    assert!(rendered.starts_with("pipeline {\n    agent any\n    stages {\n"));
}

#[test]
fn irregular_indentation_is_canonicalised() {
    let doc = Jenkinsfile::parse(&read_fixture("irregular_indent")).unwrap();
    let expected = "\
pipeline {
    agent any
    stages {
        stage('Build') {
            steps {
                sh 'make'
            }
        }
    }
}
";
    assert_eq!(doc.render(), expected);
}

#[test]
fn script_bodies_are_nested_one_level_deeper() {
    let doc = Jenkinsfile::parse(&read_fixture("sh_block")).unwrap();
    let rendered = doc.render();
    let step_indent = " ".repeat(16);
    let body_indent = " ".repeat(20);
    assert!(rendered.contains(&format!("\n{step_indent}sh '''\n{body_indent}deploy() {{\n")));
    assert!(rendered.contains(&format!("\n{body_indent}deploy\n{step_indent}'''\n")));
}

/// Relative indentation inside a script body is not kept.
#[test]
fn script_indentation_is_flattened() {
    let doc = Jenkinsfile::parse(&read_fixture("sh_block")).unwrap();
    let body_indent = " ".repeat(20);
    assert!(
        doc.render()
            .contains(&format!("\n{body_indent}./deploy.sh \"$TAG\"\n"))
    );
}

// Malformed input

/// A stray closer before the pipeline is dropped in lenient mode.
#[test]
fn stray_closer_is_dropped() {
    let doc = Jenkinsfile::parse_with_mode("}\npipeline {\n    agent any\n}\n", ParseMode::Lenient)
        .unwrap();
    assert_eq!(doc.render(), "pipeline {\n    agent any\n}\n");
}

/// Braces inside a script body never close the enclosing block.
#[test]
fn braces_in_script_do_not_nest() {
    let parsed = parse_document("steps {\nsh '''\n}\n}\n'''\n}");
    assert!(parsed.problems.is_empty());
    assert_eq!(parsed.elements.len(), 1);
    assert_eq!(parsed.elements[0].children.len(), 4);
}

#[test]
fn empty_document() {
    let parsed = parse_document("");
    assert!(parsed.elements.is_empty());
    assert!(parsed.problems.is_empty());
}

#[test]
fn blank_lines_only() {
    let parsed = parse_document("\n\n\n");
    assert!(parsed.elements.is_empty());
}
