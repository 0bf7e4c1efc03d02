//! Line-break handling for rendered message text.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Split `text` into visual lines on `\r\n`, `\r`, or `\n`.
///
/// Every separator produces a break, so `"a\n\nb"` yields an empty middle
/// line. Text without separators comes back as a single segment.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}
