//! Keeps raw player input on one log line.

/// Longest input echoed into a log record.
const MAX_ECHO: usize = 80;

/// Escape a line of player input for logging. Control characters become visible
/// escapes (`\n`, `\t`, `\u{1b}`...) and anything past [`MAX_ECHO`] characters is cut
/// with an ellipsis, so a pasted wall of text cannot flood the log.
pub fn escape_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len().min(MAX_ECHO) + 4);
    for (i, ch) in raw.chars().enumerate() {
        if i == MAX_ECHO {
            out.push('…');
            break;
        }
        match ch {
            '"' => out.push_str("\\\""),
            c if c.is_control() || c == '\\' => out.extend(c.escape_default()),
            c => out.push(c),
        }
    }
    out
}
