use crate::document::Jenkinsfile;
use crate::parsing::blocks::{JenkinsfileLineClassifier, LineKind, Node, Role, kinds::StageHeader};
use crate::parsing::source::LineRef;

use super::EditError;

impl Jenkinsfile {
    /// Inserts `stage('<name>') { steps { ... } }` at `index` in the stage list.
    ///
    /// The target is the first `stages` block of the first `pipeline` element.
    /// Stages previously at `index..` move one position down. Each step string
    /// becomes one statement line, in order. The document is left untouched
    /// when any argument is rejected.
    pub fn insert_stage<S: AsRef<str>>(
        &mut self,
        name: &str,
        steps: &[S],
        index: usize,
    ) -> Result<(), EditError> {
        let stage = new_stage(name, steps)?;
        let stages = self
            .elements
            .iter_mut()
            .find(|e| e.role == Role::Pipeline)
            .and_then(|pipeline| {
                pipeline
                    .children
                    .iter_mut()
                    .find(|c| c.role == Role::Stages)
            })
            .ok_or(EditError::StageContainerNotFound)?;

        let len = stages.children.len();
        if index > len {
            return Err(EditError::IndexOutOfRange { index, len });
        }

        let mut old = std::mem::take(&mut stages.children).into_iter();
        let mut rebuilt = Vec::with_capacity(len + 1);
        rebuilt.extend(old.by_ref().take(index));
        rebuilt.push(stage);
        rebuilt.extend(old);
        stages.children = rebuilt;

        log::debug!("inserted stage {name:?} at index {index} of {len}");
        Ok(())
    }
}

/// Builds a stage block holding a single `steps` block.
///
/// Steps are trimmed. A step must read back as one `Statement` line, so empty
/// steps, multi-line steps, block openers, closers and script openers are
/// rejected, as is a stage name spanning several lines.
pub fn new_stage<S: AsRef<str>>(name: &str, steps: &[S]) -> Result<Node, EditError> {
    if name.contains(['\n', '\r']) {
        return Err(EditError::InvalidStageName {
            name: name.to_string(),
        });
    }

    let steps = steps
        .iter()
        .map(|step| statement_step(step.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node::block_with_children(
        StageHeader::format(name),
        vec![Node::block_with_children("steps", steps)],
    ))
}

fn statement_step(step: &str) -> Result<Node, EditError> {
    let invalid = || EditError::InvalidStep {
        step: step.to_string(),
    };
    if step.contains(['\n', '\r']) {
        return Err(invalid());
    }

    let line = LineRef {
        number: 1,
        text: step.to_string(),
    };
    let class = JenkinsfileLineClassifier.classify(&line, None);
    match class.kind {
        LineKind::Statement => Ok(Node::statement(class.text)),
        _ => Err(invalid()),
    }
}
