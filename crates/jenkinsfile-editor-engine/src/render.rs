//! Serialization of the tree back to Jenkinsfile text.
//!
//! Indentation is never stored on nodes. Every line is re-indented from its
//! depth, which gives canonical output for irregularly indented input and makes
//! `render(parse(render(doc))) == render(doc)` hold exactly.

use crate::document::Jenkinsfile;
use crate::parsing::blocks::{Node, NodeKind};

pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Renders documents with a fixed indentation unit.
#[derive(Debug, Clone)]
pub struct Renderer {
    unit: String,
}

impl Renderer {
    pub fn new(indent_width: usize) -> Self {
        Self {
            unit: " ".repeat(indent_width),
        }
    }

    pub fn render(&self, doc: &Jenkinsfile) -> String {
        let mut out = String::new();
        for element in &doc.elements {
            self.write_node(&mut out, element, "");
        }
        out
    }

    fn write_node(&self, out: &mut String, node: &Node, indent: &str) {
        out.push_str(indent);
        out.push_str(&node.header);
        out.push_str(if node.has_braces() { " {\n" } else { "\n" });

        let child_indent = format!("{indent}{}", self.unit);
        // Script bodies sit one level below their `sh '''` line.
        let script_indent = format!("{child_indent}{}", self.unit);
        for child in &node.children {
            let indent = match child.kind {
                NodeKind::VerbatimLine => &script_indent,
                _ => &child_indent,
            };
            self.write_node(out, child, indent);
        }

        if node.has_braces() {
            out.push_str(indent);
            out.push_str("}\n");
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

pub fn outline(doc: &Jenkinsfile) -> String {
    fn walk(out: &mut String, node: &Node, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.header);
        out.push('\n');
        for child in &node.children {
            walk(out, child, depth + 1);
        }
    }

    let mut out = String::new();
    for element in &doc.elements {
        walk(&mut out, element, 0);
    }
    out
}
