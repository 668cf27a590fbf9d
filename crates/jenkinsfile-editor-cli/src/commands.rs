use anyhow::{Context, Result, anyhow};
use jenkinsfile_editor_engine::{Jenkinsfile, ParseMode, Renderer};

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub indent_width: usize,
    pub mode: ParseMode,
}

impl Settings {
    fn parse(&self, source: &str) -> Result<Jenkinsfile> {
        Jenkinsfile::parse_with_mode(source, self.mode).context("Failed to parse Jenkinsfile")
    }

    fn render(&self, doc: &Jenkinsfile) -> String {
        Renderer::new(self.indent_width).render(doc)
    }
}

/// Where a new stage goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// Zero-based index in the stage list.
    At(usize),
    /// Immediately before the first stage running a step that contains this text.
    Before(String),
}

pub fn format(source: &str, settings: &Settings) -> Result<String> {
    let doc = settings.parse(source)?;
    Ok(settings.render(&doc))
}

pub fn outline(source: &str, settings: &Settings) -> Result<String> {
    Ok(settings.parse(source)?.outline())
}

pub fn find_stage(source: &str, needle: &str, settings: &Settings) -> Result<Option<usize>> {
    Ok(settings.parse(source)?.find_stage_index(needle))
}

pub fn insert_stage(
    source: &str,
    name: &str,
    steps: &[String],
    position: &Position,
    settings: &Settings,
) -> Result<String> {
    let mut doc = settings.parse(source)?;

    let index = match position {
        Position::At(index) => *index,
        Position::Before(needle) => doc
            .find_stage_index(needle)
            .ok_or_else(|| anyhow!("No stage runs a step matching {needle:?}"))?,
    };

    doc.insert_stage(name, steps, index)
        .with_context(|| format!("Failed to insert stage {name:?}"))?;
    Ok(settings.render(&doc))
}
