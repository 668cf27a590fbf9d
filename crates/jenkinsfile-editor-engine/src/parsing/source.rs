use xi_rope::Rope;

/// Document text with surrounding whitespace removed, ready to be split into lines.
///
/// The whole document is trimmed once up front; `line_offset` remembers how many
/// leading lines were dropped so line numbers still point into the original input.
#[derive(Debug, Clone)]
pub struct NormalizedSource {
    pub rope: Rope,
    pub line_offset: usize,
}

impl NormalizedSource {
    pub fn new(text: &str) -> Self {
        let body = text.trim_start();
        let line_offset = text[..text.len() - body.len()].matches('\n').count();
        Self {
            rope: Rope::from(body.trim_end()),
            line_offset,
        }
    }

    /// Physical lines of the trimmed document, numbered against the original input.
    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        let offset = self.line_offset;
        split_lines(&self.rope).map(move |mut lr| {
            lr.number += offset;
            lr
        })
    }
}

/// A single physical line of the source.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Raw line text, newline included.
    pub text: String,
}

/// Splits the rope into numbered physical lines.
///
/// `lines_raw` keeps the terminators, so the lines concatenate back to the rope.
pub fn split_lines(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines_raw(..)
        .enumerate()
        .map(|(idx, line)| LineRef {
            number: idx + 1,
            text: line.into_owned(),
        })
}
