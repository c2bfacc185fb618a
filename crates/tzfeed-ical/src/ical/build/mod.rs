//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in characters.
///
/// Folding counts `char`s rather than octets; a multi-byte character
/// near the boundary can push a physical line past 75 octets. Known
/// limitation, kept for compatibility with the upstream behavior.
const MAX_LINE_UNITS: usize = 75;

/// Folds a single logical line to the maximum length.
///
/// Lines longer than 75 characters are split into a 75-character first
/// segment followed by 75-character continuation segments, each
/// prefixed with CRLF + one space.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_UNITS {
        return line.to_string();
    }

    let chars: Vec<char> = line.chars().collect();
    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_UNITS * 3);

    for (i, chunk) in chars.chunks(MAX_LINE_UNITS).enumerate() {
        if i > 0 {
            result.push_str("\r\n ");
        }
        result.extend(chunk.iter());
    }

    result
}

/// Folds a sequence of logical lines into wire text.
///
/// Each line is folded individually; lines are joined with CRLF and
/// the document is terminated with a trailing CRLF.
#[must_use]
pub fn fold(lines: &[String]) -> String {
    let mut result = String::new();

    for line in lines {
        result.push_str(&fold_line(line));
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ical::parse::unfold;

    #[test]
    fn short_line_unchanged() {
        let line = "SUMMARY:Team Meeting";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn fold_at_75_units() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        assert_eq!(folded, format!("{}\r\n {}", "X".repeat(75), "X".repeat(5)));
    }

    #[test]
    fn fold_long_line_segments() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);
        let segments: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 75);
        assert_eq!(segments[1].len(), 76);
        assert!(segments[1].starts_with(' '));
    }

    #[test]
    fn fold_appends_trailing_line_ending() {
        let lines = vec!["BEGIN:VCALENDAR".to_string(), "END:VCALENDAR".to_string()];
        assert_eq!(fold(&lines), "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n");
    }

    #[test]
    fn fold_unfold_round_trip() {
        let lines = vec![
            "BEGIN:VEVENT".to_string(),
            format!("DESCRIPTION:{}", "word ".repeat(40)),
            "END:VEVENT".to_string(),
        ];
        assert_eq!(unfold(&fold(&lines)), lines);
    }
}
