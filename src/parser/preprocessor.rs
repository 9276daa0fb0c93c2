use super::types::LineRecord;

/// Split source text into trimmed, 1-based line records.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn split_lines(content: &str) -> Vec<LineRecord> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .enumerate()
        .map(|(i, line)| LineRecord {
            number: i + 1,
            text: line.trim().to_string(),
        })
        .collect()
}
