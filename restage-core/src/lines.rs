//! Line splitting and joining with carriage-return normalization.
//!
//! License: MIT OR Apache-2.0

/// Splits decoded text on line feeds.
///
/// Carriage returns are not treated as separators; a CRLF file yields lines
/// with a trailing `\r` still attached, which [`join_lines`] later folds
/// into a uniform CRLF output.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Joins lines with line feeds.
///
/// If any carriage return is present anywhere in the joined text, every
/// `\r` is stripped and every line feed becomes CRLF. The decision is
/// global per file: one stray `\r` normalizes all line breaks.
pub fn join_lines(lines: &[String]) -> String {
    let joined = lines.join("\n");
    if joined.contains('\r') {
        joined.replace('\r', "").replace('\n', "\r\n")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn split_keeps_carriage_returns_attached() {
        assert_eq!(split_lines("a\r\nb\nc"), owned(&["a\r", "b", "c"]));
    }

    #[test]
    fn lf_only_text_round_trips() {
        let text = "a\nb\n\nc\n";
        assert_eq!(join_lines(&split_lines(text)), text);
    }

    #[test]
    fn crlf_text_round_trips() {
        let text = "a\r\nb\r\n";
        assert_eq!(join_lines(&split_lines(text)), text);
    }

    #[test]
    fn single_stray_cr_normalizes_every_break() {
        // only the first break is CRLF, yet the whole file comes out CRLF
        let text = "a\r\nb\nc\nd";
        assert_eq!(join_lines(&split_lines(text)), "a\r\nb\r\nc\r\nd");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(join_lines(&split_lines("")), "");
    }
}
