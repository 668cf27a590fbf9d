use std::fmt;
use std::str::FromStr;

use crate::parsing::{ParseMode, ParsedDoc, blocks::Node, error::ParseError, parse_document};
use crate::render::{Renderer, outline};

/// A parsed Jenkinsfile: the ordered top-level nodes of the document.
///
/// In practice this is a single `pipeline` block, possibly preceded by
/// statements such as `@Library(...) _`; the model does not enforce it.
///
/// ```rust
/// # use jenkinsfile_editor_engine::Jenkinsfile;
/// let text = "pipeline {\n    agent any\n}\n";
/// let doc = Jenkinsfile::parse(text).unwrap();
/// assert_eq!(doc.render(), text);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jenkinsfile {
    pub elements: Vec<Node>,
}

impl Jenkinsfile {
    pub fn new(elements: Vec<Node>) -> Self {
        Self { elements }
    }

    /// Parses `source` in [`ParseMode::Strict`].
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Self::parse_with_mode(source, ParseMode::Strict)
    }

    pub fn parse_with_mode(source: &str, mode: ParseMode) -> Result<Self, ParseError> {
        let ParsedDoc { elements, problems } = parse_document(source);

        match mode {
            ParseMode::Strict => {
                if let Some(first) = problems.into_iter().next() {
                    return Err(first);
                }
            }
            ParseMode::Lenient => {
                for problem in &problems {
                    log::warn!("ignoring malformed input: {problem}");
                }
            }
        }

        Ok(Self { elements })
    }

    /// Renders with the default four-space indent.
    pub fn render(&self) -> String {
        Renderer::default().render(self)
    }

    /// Brace-less view of the tree: one header per line, two spaces per depth.
    pub fn outline(&self) -> String {
        outline(self)
    }
}

impl FromStr for Jenkinsfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Jenkinsfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
