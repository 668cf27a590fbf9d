use std::sync::OnceLock;

use regex::Regex;

/// Header syntax of a stage block: `stage('Build')` or `stage("Build")`.
pub struct StageHeader;

impl StageHeader {
    /// Builds a stage header, escaping quotes and backslashes in `name`.
    pub fn format(name: &str) -> String {
        let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
        format!("stage('{escaped}')")
    }

    /// Extracts the unescaped stage name from a block header.
    pub fn name(header: &str) -> Option<String> {
        let caps = stage_regex().captures(header)?;
        let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
        Some(unescape(raw))
    }

    pub fn matches(header: &str) -> bool {
        stage_regex().is_match(header)
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(next) = chars.next()
        {
            out.push(next);
        } else {
            out.push(c);
        }
    }
    out
}

fn stage_regex() -> &'static Regex {
    static STAGE: OnceLock<Regex> = OnceLock::new();
    STAGE.get_or_init(|| {
        Regex::new(r#"^stage\s*\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*\)$"#)
            .expect("Invalid stage header regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("stage('Build')", Some("Build"))]
    #[case("stage(\"Deploy to prod\")", Some("Deploy to prod"))]
    #[case("stage( 'Spaced' )", Some("Spaced"))]
    #[case("stage('It\\'s')", Some("It's"))]
    #[case("stages", None)]
    #[case("stage('Build') when", None)]
    fn extracts_names(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(StageHeader::name(header).as_deref(), expected);
    }

    #[test]
    fn format_quotes_name() {
        assert_eq!(StageHeader::format("New"), "stage('New')");
    }

    #[test]
    fn format_escapes_quotes_and_backslashes() {
        let header = StageHeader::format(r"It's C:\tmp");
        assert_eq!(header, r"stage('It\'s C:\\tmp')");
        assert_eq!(StageHeader::name(&header).as_deref(), Some(r"It's C:\tmp"));
    }
}
