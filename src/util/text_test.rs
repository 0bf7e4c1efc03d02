use super::*;

#[test]
fn split_lines_handles_each_separator_style() {
    assert_eq!(split_lines("line1\nline2"), vec!["line1", "line2"]);
    assert_eq!(split_lines("line1\r\nline2"), vec!["line1", "line2"]);
    assert_eq!(split_lines("line1\rline2"), vec!["line1", "line2"]);
}

#[test]
fn split_lines_keeps_single_line_intact() {
    assert_eq!(split_lines("hello world"), vec!["hello world"]);
    assert_eq!(split_lines(""), vec![""]);
}

#[test]
fn split_lines_emits_a_break_per_separator() {
    assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    assert_eq!(split_lines("a\n\r\nb"), vec!["a", "", "b"]);
    assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
}

#[test]
fn split_lines_trailing_separator_leaves_empty_tail() {
    assert_eq!(split_lines("AAPL\n"), vec!["AAPL", ""]);
}

#[test]
fn split_lines_preserves_multibyte_text() {
    assert_eq!(split_lines("café\n日本"), vec!["café", "日本"]);
}
