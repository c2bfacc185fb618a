//! Document pipeline: one pass over unfolded lines.

use tzfeed_core::constants::CANONICAL_PRODID;

use super::{TransformOptions, datetime, event, timezone};
use crate::ical::core::PropertyLine;
use crate::ical::{build, parse};

/// Block-nesting state while walking the document.
///
/// Explicit states instead of nested conditionals so block matching
/// stays provably balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    /// Inside BEGIN:VTIMEZONE..END:VTIMEZONE; transition date-times
    /// are structural and must never be rewritten.
    InTimezone,
    /// Inside BEGIN:VEVENT..END:VEVENT; lines buffer until close.
    InEvent,
}

/// ## Summary
/// Transforms a raw calendar document under the given timezone policy.
///
/// Unfolds the input, rewrites date-time properties outside VTIMEZONE
/// blocks, normalizes each event block at its close marker, rewrites
/// the PRODID to the canonical downstream-compatible value, integrates
/// the synthesized VTIMEZONE block, and re-folds with a trailing CRLF.
///
/// Total over any input string: malformed date-time values pass
/// through unchanged and nothing here panics.
#[must_use]
pub fn transform(input: &str, options: &TransformOptions) -> String {
    let lines = parse::unfold(input);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut event_buf: Vec<String> = Vec::new();
    let mut state = BlockState::Outside;

    for line in lines {
        match state {
            BlockState::Outside => {
                if line.eq_ignore_ascii_case("BEGIN:VTIMEZONE") {
                    state = BlockState::InTimezone;
                    out.push(line);
                } else if line.eq_ignore_ascii_case("BEGIN:VEVENT") {
                    state = BlockState::InEvent;
                    event_buf.clear();
                    out.push(line);
                } else {
                    out.push(rewrite_if_datetime(line, options));
                }
            }
            BlockState::InTimezone => {
                if line.eq_ignore_ascii_case("END:VTIMEZONE") {
                    state = BlockState::Outside;
                }
                out.push(line);
            }
            BlockState::InEvent => {
                if line.eq_ignore_ascii_case("END:VEVENT") {
                    state = BlockState::Outside;
                    out.extend(event::normalize_event(&event_buf));
                    event_buf.clear();
                    out.push(line);
                } else {
                    event_buf.push(rewrite_if_datetime(line, options));
                }
            }
        }
    }

    if state != BlockState::Outside {
        // Upstream feeds occasionally truncate; keep the buffered
        // lines rather than dropping them.
        tracing::warn!(?state, "Unbalanced block marker at end of document");
        out.append(&mut event_buf);
    }

    if let Some(idx) = out
        .iter()
        .position(|l| PropertyLine::parse(l).is_some_and(|p| p.is_named("PRODID")))
    {
        out[idx] = CANONICAL_PRODID.to_string();
    }

    if timezone::is_zone_identifier(&options.timezone) {
        out = timezone::integrate_vtimezone(out, &options.timezone);
    }

    build::fold(&out)
}

fn rewrite_if_datetime(line: String, options: &TransformOptions) -> String {
    let is_datetime = PropertyLine::parse(&line)
        .is_some_and(|p| datetime::is_datetime_property(&p.name));
    if is_datetime {
        datetime::rewrite(&line, options)
    } else {
        line
    }
}
