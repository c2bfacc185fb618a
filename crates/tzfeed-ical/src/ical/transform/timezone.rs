//! Timezone resolution and VTIMEZONE synthesis.
//!
//! Legacy platform zone names are translated through a fixed table;
//! everything else is tried directly as an IANA identifier.

use std::str::FromStr;

use chrono_tz::Tz;

/// Error during timezone resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Fixed translation table for legacy platform-specific zone names.
///
/// Covers the Windows-style identifiers the known upstream emits for
/// Western/Central European and US zones. Unmapped names pass through
/// unchanged.
pub const LEGACY_ZONE_NAMES: [(&str, &str); 12] = [
    ("W. Europe Standard Time", "Europe/Berlin"),
    ("Central Europe Standard Time", "Europe/Prague"),
    ("Central European Standard Time", "Europe/Warsaw"),
    ("Romance Standard Time", "Europe/Paris"),
    ("GMT Standard Time", "Europe/London"),
    ("Greenwich Standard Time", "Atlantic/Reykjavik"),
    ("Eastern Standard Time", "America/New_York"),
    ("Central Standard Time", "America/Chicago"),
    ("Mountain Standard Time", "America/Denver"),
    ("Pacific Standard Time", "America/Los_Angeles"),
    ("US Eastern Standard Time", "America/Indiana/Indianapolis"),
    ("US Mountain Standard Time", "America/Phoenix"),
];

/// Translates a legacy platform zone name to its IANA equivalent.
#[must_use]
pub fn translate_legacy(name: &str) -> Option<&'static str> {
    LEGACY_ZONE_NAMES
        .iter()
        .find(|(legacy, _)| name.eq_ignore_ascii_case(legacy))
        .map(|(_, iana)| *iana)
}

/// ## Summary
/// Resolves a zone identifier to a `chrono_tz::Tz`.
///
/// Legacy platform names are translated through the fixed table first;
/// unmapped names are tried directly as IANA identifiers.
///
/// ## Errors
/// Returns `ResolveError::UnknownTimezone` if the identifier cannot be
/// resolved either way. Callers in the rewrite path fall back to UTC.
pub fn resolve(tzid: &str) -> Result<Tz, ResolveError> {
    let normalized = translate_legacy(tzid).unwrap_or(tzid);

    Tz::from_str(normalized).map_err(|_e| ResolveError::UnknownTimezone(tzid.to_string()))
}

/// Loose shape check for a `Region/Locality`-style zone identifier.
///
/// Gates VTIMEZONE insertion only; an identifier failing this check
/// does not block the rest of the transform.
#[must_use]
pub fn is_zone_identifier(zone: &str) -> bool {
    let Some((region, locality)) = zone.split_once('/') else {
        return false;
    };
    if region.is_empty() || locality.is_empty() {
        return false;
    }
    zone.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+'))
}

/// Synthesizes the fixed VTIMEZONE block for a target zone.
///
/// One DAYLIGHT and one STANDARD transition, last Sunday of March and
/// October, offsets +0100/+0200. This is a static block that exists to
/// satisfy the downstream consumer, not real zone rule data; it is
/// emitted unchanged regardless of the zone's actual rules.
#[must_use]
pub fn vtimezone_block(zone: &str) -> Vec<String> {
    vec![
        "BEGIN:VTIMEZONE".to_string(),
        format!("TZID:{zone}"),
        "BEGIN:DAYLIGHT".to_string(),
        "TZOFFSETFROM:+0100".to_string(),
        "TZOFFSETTO:+0200".to_string(),
        "TZNAME:CEST".to_string(),
        "DTSTART:19700329T020000".to_string(),
        "RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU".to_string(),
        "END:DAYLIGHT".to_string(),
        "BEGIN:STANDARD".to_string(),
        "TZOFFSETFROM:+0200".to_string(),
        "TZOFFSETTO:+0100".to_string(),
        "TZNAME:CET".to_string(),
        "DTSTART:19701025T030000".to_string(),
        "RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU".to_string(),
        "END:STANDARD".to_string(),
        "END:VTIMEZONE".to_string(),
    ]
}

/// ## Summary
/// Ensures the document carries a VTIMEZONE block for the target zone.
///
/// If a block already declares the target zone, the document is
/// returned unchanged. Otherwise the synthesized block replaces the
/// first existing VTIMEZONE block; with no existing block it is
/// inserted immediately before the first `BEGIN:VEVENT`, or appended
/// at the end if there is no event block either.
#[must_use]
pub fn integrate_vtimezone(lines: Vec<String>, zone: &str) -> Vec<String> {
    let mut first_block: Option<(usize, usize)> = None;
    let mut block_start: Option<usize> = None;
    let mut target_present = false;

    for (i, line) in lines.iter().enumerate() {
        if line.eq_ignore_ascii_case("BEGIN:VTIMEZONE") {
            block_start.get_or_insert(i);
        } else if line.eq_ignore_ascii_case("END:VTIMEZONE")
            && let Some(start) = block_start.take()
        {
            if declares_zone(&lines[start..=i], zone) {
                target_present = true;
                break;
            }
            first_block.get_or_insert((start, i));
        }
    }

    if target_present {
        // Target zone already defined, nothing to do.
        return lines;
    }

    let mut out = lines;
    let block = vtimezone_block(zone);

    if let Some((start, end)) = first_block {
        out.splice(start..=end, block);
    } else if let Some(pos) = out
        .iter()
        .position(|l| l.eq_ignore_ascii_case("BEGIN:VEVENT"))
    {
        out.splice(pos..pos, block);
    } else {
        out.extend(block);
    }

    out
}

/// Returns whether a VTIMEZONE block's lines declare the given TZID.
fn declares_zone(block: &[String], zone: &str) -> bool {
    block.iter().any(|line| {
        line.get(..5)
            .is_some_and(|p| p.eq_ignore_ascii_case("TZID:"))
            && line[5..].trim() == zone
    })
}
