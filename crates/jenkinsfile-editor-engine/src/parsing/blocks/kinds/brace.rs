/// Brace-delimited block syntax.
///
/// A block opens on a line ending in `{` and closes on a line that is exactly `}`.
pub struct Brace;

impl Brace {
    pub const OPEN: char = '{';
    pub const CLOSE: &'static str = "}";

    /// Returns the block header if `line` opens a block.
    ///
    /// The header is the line without its trailing `{` and the whitespace before
    /// it, so `stage('Build') {` and `stage('Build'){` share one header.
    pub fn block_header(line: &str) -> Option<&str> {
        line.strip_suffix(Self::OPEN).map(str::trim_end)
    }

    pub fn is_close(line: &str) -> bool {
        line == Self::CLOSE
    }
}
