//! Line splitting shared by every document scan.

/// Splits document text into lines the way an editor numbers them.
///
/// Lines are separated by `\n` and a trailing `\r` is dropped from each one,
/// so CRLF files scan the same as LF files. Unlike [`str::lines`], an empty
/// document is a single empty line and a trailing newline produces a final
/// empty line; line indices therefore match editor line numbers.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Returns the byte offset where line `line` starts.
///
/// A line index at or past the line count is clipped to the end of the text.
pub fn line_start_offset(text: &str, line: usize) -> usize {
    if line == 0 {
        return 0;
    }

    text.match_indices('\n')
        .nth(line - 1)
        .map(|(pos, _)| pos + 1)
        .unwrap_or(text.len())
}
