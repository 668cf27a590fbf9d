use crate::parsing::{ParsedDoc, error::ParseError};

use super::{
    classify::{LineClass, LineKind},
    containers::BlockStack,
    kinds::TripleQuote,
    types::{Node, NodeKind},
};

#[derive(Debug, Clone, Copy)]
struct OpenVerbatim {
    quote: TripleQuote,
    line: usize,
}

/// State machine turning classified lines into a tree.
///
/// Malformed input never stops the build: problems are collected and returned
/// with the tree from [`BlockBuilder::finish`].
pub struct BlockBuilder {
    stack: BlockStack,
    verbatim: Option<OpenVerbatim>,
    out: Vec<Node>,
    problems: Vec<ParseError>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            stack: BlockStack::default(),
            verbatim: None,
            out: vec![],
            problems: vec![],
        }
    }

    /// Quote style of the verbatim block currently open, fed back to the classifier.
    pub fn verbatim(&self) -> Option<TripleQuote> {
        self.verbatim.map(|v| v.quote)
    }

    pub fn push(&mut self, c: LineClass) {
        match c.kind {
            LineKind::Blank => {}
            LineKind::VerbatimOpen(quote) => {
                self.verbatim = Some(OpenVerbatim {
                    quote,
                    line: c.number,
                });
                self.attach(Node::leaf(NodeKind::VerbatimOpen, c.text));
            }
            LineKind::VerbatimClose => {
                self.verbatim = None;
                self.attach(Node::leaf(NodeKind::VerbatimClose, c.text));
            }
            LineKind::VerbatimLine => {
                self.attach(Node::leaf(NodeKind::VerbatimLine, c.text));
            }
            LineKind::BlockOpen { header } => {
                self.stack.push(Node::block(header), c.number);
            }
            LineKind::BlockClose => self.close_block(c.number),
            LineKind::Statement => {
                self.attach(Node::statement(c.text));
            }
        }
    }

    pub fn finish(mut self) -> ParsedDoc {
        // EOF flush
        if let Some(open) = self.verbatim.take() {
            self.problems
                .push(ParseError::UnterminatedVerbatimBlock { line: open.line });
        }

        // Unclosed blocks keep their content: fold each into its parent.
        while let Some(open) = self.stack.pop() {
            self.problems.push(ParseError::UnclosedBlock {
                header: open.node.header.clone(),
                line: open.line,
            });
            self.attach(open.node);
        }

        ParsedDoc {
            elements: self.out,
            problems: self.problems,
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.top_mut() {
            Some(parent) => parent.children.push(node),
            None => self.out.push(node),
        }
    }

    fn close_block(&mut self, line: usize) {
        match self.stack.pop() {
            Some(open) => {
                log::trace!(
                    "closed `{}` (line {} to {line}) at depth {}",
                    open.node.header,
                    open.line,
                    self.stack.depth()
                );
                self.attach(open.node);
            }
            // Stray closer: dropped, reported.
            None => self.problems.push(ParseError::UnbalancedBraces { line }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::classify::JenkinsfileLineClassifier, source::NormalizedSource};
    use pretty_assertions::assert_eq;

    fn build(text: &str) -> ParsedDoc {
        let source = NormalizedSource::new(text);
        let mut builder = BlockBuilder::new();
        for lr in source.lines() {
            let lc = JenkinsfileLineClassifier.classify(&lr, builder.verbatim());
            builder.push(lc);
        }
        builder.finish()
    }

    #[test]
    fn nested_blocks_attach_to_parents() {
        let doc = build("pipeline {\nstages {\nstage('A') {\n}\n}\n}");
        assert!(doc.problems.is_empty());
        assert_eq!(doc.elements.len(), 1);
        let stages = &doc.elements[0].children[0];
        assert_eq!(stages.header, "stages");
        assert_eq!(stages.children[0].header, "stage('A')");
    }

    #[test]
    fn top_level_statements_go_to_document() {
        let doc = build("@Library('shared') _\npipeline {\n}");
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.elements[0].kind, NodeKind::Statement);
        assert_eq!(doc.elements[1].kind, NodeKind::Block);
    }

    #[test]
    fn verbatim_lines_are_siblings() {
        let doc = build("steps {\nsh '''\nif true; then {\n}\n'''\n}");
        assert!(doc.problems.is_empty());
        let kinds: Vec<NodeKind> = doc.elements[0].children.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::VerbatimOpen,
                NodeKind::VerbatimLine,
                NodeKind::VerbatimLine,
                NodeKind::VerbatimClose,
            ]
        );
    }

    #[test]
    fn stray_closer_is_dropped_and_reported() {
        let doc = build("pipeline {\n}\n}");
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.problems, vec![ParseError::UnbalancedBraces { line: 3 }]);
    }

    #[test]
    fn unclosed_blocks_are_folded_and_reported() {
        let doc = build("pipeline {\nstages {\necho 'x'");
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].children[0].children[0].header, "echo 'x'");
        assert_eq!(
            doc.problems,
            vec![
                ParseError::UnclosedBlock {
                    header: "stages".into(),
                    line: 2
                },
                ParseError::UnclosedBlock {
                    header: "pipeline".into(),
                    line: 1
                },
            ]
        );
    }

    #[test]
    fn unterminated_verbatim_is_reported_at_opener() {
        let doc = build("steps {\nsh '''\necho hi\n}");
        assert_eq!(
            doc.problems,
            vec![
                ParseError::UnterminatedVerbatimBlock { line: 2 },
                ParseError::UnclosedBlock {
                    header: "steps".into(),
                    line: 1
                },
            ]
        );
        // the closing brace was swallowed by the script body
        assert_eq!(doc.elements[0].children.last().unwrap().header, "}");
    }
}
