#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one tab-separated row, trimming each field.
///
/// A trailing carriage return (CRLF files) is dropped.
pub fn split_tsv_line(line: &str) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split('\t')
        .map(|field| field.trim().to_string())
        .collect()
}

/// `true` for lines carrying no data (empty or whitespace only).
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
