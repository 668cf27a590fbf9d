use crate::document::Jenkinsfile;
use crate::parsing::blocks::{Node, Role};

impl Jenkinsfile {
    /// Index of the first stage whose `steps` contain a step matching `needle`.
    ///
    /// Only the stage list [`insert_stage`](Self::insert_stage) edits is
    /// searched: the first `stages` block of the first `pipeline` element. The
    /// index counts all children of that block.
    pub fn find_stage_index(&self, needle: &str) -> Option<usize> {
        self.stage_list()?
            .children
            .iter()
            .position(|stage| runs_step(stage, needle))
    }

    /// Names of the stages in that same list, in order.
    pub fn stage_names(&self) -> Vec<String> {
        self.stage_list()
            .map(|stages| stages.children.iter().filter_map(Node::stage_name).collect())
            .unwrap_or_default()
    }

    fn stage_list(&self) -> Option<&Node> {
        self.elements
            .iter()
            .find(|e| e.role == Role::Pipeline)?
            .children
            .iter()
            .find(|c| c.role == Role::Stages)
    }
}

fn runs_step(stage: &Node, needle: &str) -> bool {
    stage
        .children
        .iter()
        .filter(|c| c.role == Role::Steps)
        .flat_map(|steps| &steps.children)
        .any(|step| step.content().contains(needle))
}
