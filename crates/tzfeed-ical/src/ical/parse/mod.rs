//! Content line unfolding (RFC 5545 §3.1).
//!
//! Folded wire lines are merged back into logical lines before any
//! transformation runs.

/// Splits raw input into logical lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. A line starting with
/// SPACE or HTAB continues the previous logical line; the marker
/// character is removed and the content concatenated. A continuation
/// with no preceding line becomes a new line with the marker stripped
/// (should not occur in valid input).
#[must_use]
pub fn unfold(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if line.starts_with([' ', '\t']) {
            // Safety: starts_with check guarantees line is not empty
            let continuation = &line[1..];
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push(continuation.to_string());
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_simple() {
        let input = "DESCRIPTION:This is a long description\r\n that continues here";
        assert_eq!(
            unfold(input),
            vec!["DESCRIPTION:This is a long descriptionthat continues here"]
        );
    }

    #[test]
    fn unfold_multiple_continuations() {
        let input = "DESCRIPTION:First\r\n Second\r\n Third";
        assert_eq!(unfold(input), vec!["DESCRIPTION:FirstSecondThird"]);
    }

    #[test]
    fn unfold_bare_lf() {
        let input = "DESCRIPTION:First\n Second";
        assert_eq!(unfold(input), vec!["DESCRIPTION:FirstSecond"]);
    }

    #[test]
    fn unfold_tab_continuation() {
        let input = "SUMMARY:One\r\n\tTwo";
        assert_eq!(unfold(input), vec!["SUMMARY:OneTwo"]);
    }

    #[test]
    fn unfold_preserves_separate_lines() {
        let input = "LINE1:Value1\r\nLINE2:Value2\r\n";
        assert_eq!(unfold(input), vec!["LINE1:Value1", "LINE2:Value2"]);
    }

    #[test]
    fn orphan_continuation_becomes_line() {
        let input = " orphan";
        assert_eq!(unfold(input), vec!["orphan"]);
    }
}
