use crate::document::Jenkinsfile;
use crate::parsing::blocks::{Node, NodeKind, Role};

/// Validates tree invariants.
///
/// Asserts that:
/// - Leaf nodes have no children
/// - Block roles agree with their headers; leaves carry no role
/// - Verbatim lines and closers only follow an opener among their siblings
/// - Rendering the tree, parsing it back and rendering again is stable
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Jenkinsfile) {
    check_siblings(&doc.elements);

    let rendered = doc.render();
    let reparsed = Jenkinsfile::parse(&rendered)
        .unwrap_or_else(|e| panic!("rendered output does not parse: {e}\n{rendered}"));
    assert_eq!(reparsed.render(), rendered, "render is not idempotent");
}

fn check_siblings(nodes: &[Node]) {
    let mut in_verbatim = false;
    for node in nodes {
        match node.kind {
            NodeKind::Block => {
                assert_eq!(
                    node.role,
                    Role::for_block(&node.header),
                    "role does not match header {:?}",
                    node.header
                );
            }
            _ => {
                assert!(
                    node.children.is_empty(),
                    "leaf {:?} has children",
                    node.header
                );
                assert_eq!(node.role, Role::Other, "leaf {:?} has a role", node.header);
            }
        }

        match node.kind {
            NodeKind::VerbatimOpen => in_verbatim = true,
            NodeKind::VerbatimLine => {
                assert!(in_verbatim, "verbatim line {:?} outside a script", node.header)
            }
            NodeKind::VerbatimClose => {
                assert!(in_verbatim, "verbatim close {:?} without opener", node.header);
                in_verbatim = false;
            }
            NodeKind::Block | NodeKind::Statement => {
                assert!(!in_verbatim, "{:?} inside an open script body", node.header)
            }
        }

        check_siblings(&node.children);
    }
}
