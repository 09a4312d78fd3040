/// Collapse whitespace variation into a canonical single-spaced string.
///
/// Carriage returns, newlines and tabs become spaces, runs of spaces shrink to
/// one, and the result is trimmed. Invalid UTF-8 is replaced rather than
/// rejected, so this never fails.
pub fn normalize(data: &[u8]) -> String {
    normalize_str(&String::from_utf8_lossy(data))
}

/// [`normalize`] for text that is already decoded.
pub fn normalize_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        let c = match c {
            '\r' | '\n' | '\t' => ' ',
            c => c,
        };
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out.trim().to_string()
}
