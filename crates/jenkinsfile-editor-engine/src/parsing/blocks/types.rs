use super::kinds::StageHeader;

/// The structural kind of a node, fixed when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A brace-delimited block such as `pipeline { ... }`.
    Block,
    /// The line opening a verbatim script body (`sh '''`).
    VerbatimOpen,
    /// The line closing a verbatim script body (`'''`).
    VerbatimClose,
    /// A line inside a verbatim script body, captured as-is.
    VerbatimLine,
    /// Any other single-line statement (`agent any`, `echo 'hi'`).
    Statement,
}

/// Semantic tag of a block, derived from its header when the node is built.
///
/// Lookups for the stage list go through roles rather than header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pipeline,
    Stages,
    Stage,
    Steps,
    Other,
}

impl Role {
    pub fn for_block(header: &str) -> Self {
        match header {
            "pipeline" => Role::Pipeline,
            "stages" => Role::Stages,
            "steps" => Role::Steps,
            h if StageHeader::matches(h) => Role::Stage,
            _ => Role::Other,
        }
    }
}

/// A parsed structural unit of a Jenkinsfile.
///
/// Nodes never record their original indentation; the renderer derives it from
/// depth and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub role: Role,
    /// Text of the introducing line (for blocks, without the trailing `{`).
    pub header: String,
    /// Ordered children; always empty for leaf kinds.
    pub children: Vec<Node>,
}

impl Node {
    pub fn block(header: impl Into<String>) -> Self {
        Self::block_with_children(header, Vec::new())
    }

    pub fn block_with_children(header: impl Into<String>, children: Vec<Node>) -> Self {
        let header = header.into();
        Self {
            kind: NodeKind::Block,
            role: Role::for_block(&header),
            header,
            children,
        }
    }

    /// Creates a leaf node. `kind` must not be [`NodeKind::Block`].
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        debug_assert!(kind != NodeKind::Block, "leaf nodes cannot be blocks");
        Self {
            kind,
            role: Role::Other,
            header: text.into(),
            children: Vec::new(),
        }
    }

    pub fn statement(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Statement, text)
    }

    /// Whether the renderer wraps this node's children in `{` / `}`.
    pub fn has_braces(&self) -> bool {
        self.kind == NodeKind::Block
    }

    /// Searchable text of the node: the full line for leaves, empty for blocks.
    pub fn content(&self) -> &str {
        match self.kind {
            NodeKind::Block => "",
            _ => &self.header,
        }
    }

    /// Name of a stage block, e.g. `Build` for `stage('Build')`.
    pub fn stage_name(&self) -> Option<String> {
        match self.role {
            Role::Stage => StageHeader::name(&self.header),
            _ => None,
        }
    }
}
