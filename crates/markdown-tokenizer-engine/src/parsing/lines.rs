/// Splits a document into lines on `\n`.
///
/// `\r\n` endings are accepted, and the empty remainder after a final newline
/// is not reported as a line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// True if the line holds nothing but whitespace.
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading ASCII spaces. Tabs are not counted.
pub fn leading_space_count(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Indentation depth inside a list: two spaces per level.
pub fn indent_depth(line: &str) -> usize {
    leading_space_count(line) / 2
}
