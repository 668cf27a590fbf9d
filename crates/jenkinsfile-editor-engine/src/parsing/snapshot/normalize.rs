use std::fmt::Write;

use crate::document::Jenkinsfile;
use crate::parsing::blocks::{Node, NodeKind, Role};

/// Dumps the tree one node per line, two spaces per depth.
///
/// Blocks show their role when it is not `Other`:
/// `Block(Stage) stage('Build')`, `Statement echo 'hi'`.
pub fn normalize(doc: &Jenkinsfile) -> String {
    let mut out = String::new();
    for element in &doc.elements {
        write_node(&mut out, element, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let kind = match node.kind {
        NodeKind::Block => "Block",
        NodeKind::VerbatimOpen => "VerbatimOpen",
        NodeKind::VerbatimClose => "VerbatimClose",
        NodeKind::VerbatimLine => "VerbatimLine",
        NodeKind::Statement => "Statement",
    };
    let _ = write!(out, "{}{kind}", "  ".repeat(depth));
    if node.role != Role::Other {
        let _ = write!(out, "({:?})", node.role);
    }
    let _ = writeln!(out, " {}", node.header);

    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
