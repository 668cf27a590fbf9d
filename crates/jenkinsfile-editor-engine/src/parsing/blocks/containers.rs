use super::types::Node;

/// A block whose closing brace has not been seen yet.
#[derive(Debug)]
pub struct OpenBlock {
    pub node: Node,
    /// Line of the opening brace.
    pub line: usize,
}

/// Stack of in-progress blocks, innermost last.
///
/// Children are appended to the innermost open block; a block is attached to its
/// parent only once it is popped, so no node ever needs a back reference.
#[derive(Debug, Default)]
pub struct BlockStack(Vec<OpenBlock>);

impl BlockStack {
    pub fn push(&mut self, node: Node, line: usize) {
        self.0.push(OpenBlock { node, line });
    }

    pub fn pop(&mut self) -> Option<OpenBlock> {
        self.0.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut Node> {
        self.0.last_mut().map(|open| &mut open.node)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
