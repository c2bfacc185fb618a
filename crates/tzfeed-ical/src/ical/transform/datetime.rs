//! Date-time field classification and rewriting.
//!
//! Classifies a single date-time property line as absolute-UTC,
//! zone-qualified, floating, or all-day, and rewrites it under the
//! active timezone policy. Stateless between lines.

use std::str::FromStr;

use chrono::{LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::{TransformOptions, timezone};
use crate::ical::core::PropertyLine;

/// Property names that carry rewritable date-time values.
pub const DATETIME_PROPERTIES: [&str; 4] = ["DTSTART", "DTEND", "RECURRENCE-ID", "EXDATE"];

const FORMAT_WITH_SECONDS: &str = "%Y%m%dT%H%M%S";
const FORMAT_WITHOUT_SECONDS: &str = "%Y%m%dT%H%M";

/// Returns whether a property name is one the rewriter applies to.
#[must_use]
pub fn is_datetime_property(name: &str) -> bool {
    DATETIME_PROPERTIES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(name))
}

/// ## Summary
/// Rewrites one date-time property line under the given policy.
///
/// Decision order:
/// 1. All-day (`VALUE=DATE`) values are never touched.
/// 2. A trailing `Z` marks an absolute-UTC instant: convert to the
///    target zone's wall clock and attach `TZID`.
/// 3. An existing `TZID` is only re-anchored when `override_tzid` is
///    set; the source zone goes through the legacy-name table, then is
///    tried literally, then falls back to UTC.
/// 4. Floating values keep their digits byte-identical and only gain a
///    `TZID` parameter.
///
/// A digit-string that fails to parse leaves the line completely
/// unchanged; a corrupted line is never emitted.
#[must_use]
pub fn rewrite(line: &str, options: &TransformOptions) -> String {
    let Some(mut prop) = PropertyLine::parse(line) else {
        return line.to_string();
    };

    if prop.has_param_value("VALUE", "DATE") {
        return line.to_string();
    }

    if let Some(digits) = prop.value.strip_suffix('Z') {
        // Absolute-UTC instant.
        let Ok(target) = Tz::from_str(&options.timezone) else {
            return line.to_string();
        };
        let Some((naive, with_seconds)) = parse_digits(digits) else {
            return line.to_string();
        };
        let local = Utc.from_utc_datetime(&naive).with_timezone(&target);
        prop.value = format_digits(local.naive_local(), with_seconds);
        prop.set_tzid(&options.timezone);
        return prop.to_line();
    }

    if let Some(tzid) = prop.tzid().map(ToOwned::to_owned) {
        if !options.override_tzid {
            return line.to_string();
        }
        let Ok(target) = Tz::from_str(&options.timezone) else {
            return line.to_string();
        };
        let source = timezone::resolve(&tzid).unwrap_or(Tz::UTC);
        let Some((naive, with_seconds)) = parse_digits(&prop.value) else {
            return line.to_string();
        };
        let instant = match source.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            // DST fold: first occurrence
            LocalResult::Ambiguous(dt, _) => dt,
            // DST gap: the wall clock never happened in the source zone
            LocalResult::None => return line.to_string(),
        };
        prop.value = format_digits(instant.with_timezone(&target).naive_local(), with_seconds);
        prop.set_tzid(&options.timezone);
        return prop.to_line();
    }

    // Floating: only the claimed zone changes, never the digits.
    prop.set_tzid(&options.timezone);
    prop.to_line()
}

/// Parses a digit-string with or without seconds, preserving which
/// precision the input used.
fn parse_digits(digits: &str) -> Option<(NaiveDateTime, bool)> {
    NaiveDateTime::parse_from_str(digits, FORMAT_WITH_SECONDS)
        .ok()
        .map(|dt| (dt, true))
        .or_else(|| {
            NaiveDateTime::parse_from_str(digits, FORMAT_WITHOUT_SECONDS)
                .ok()
                .map(|dt| (dt, false))
        })
}

fn format_digits(dt: NaiveDateTime, with_seconds: bool) -> String {
    if with_seconds {
        dt.format(FORMAT_WITH_SECONDS).to_string()
    } else {
        dt.format(FORMAT_WITHOUT_SECONDS).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> TransformOptions {
        TransformOptions::new("Europe/Berlin", false)
    }

    fn berlin_override() -> TransformOptions {
        TransformOptions::new("Europe/Berlin", true)
    }

    #[test]
    fn datetime_property_names() {
        assert!(is_datetime_property("DTSTART"));
        assert!(is_datetime_property("dtend"));
        assert!(is_datetime_property("RECURRENCE-ID"));
        assert!(is_datetime_property("EXDATE"));
        assert!(!is_datetime_property("DTSTAMP"));
        assert!(!is_datetime_property("SUMMARY"));
    }

    #[test]
    fn utc_converted_to_target_wall_clock() {
        // January: Berlin is UTC+1
        let out = rewrite("DTSTART:20240101T120000Z", &berlin());
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T130000");
    }

    #[test]
    fn utc_converted_during_dst() {
        // July: Berlin is UTC+2
        let out = rewrite("DTEND:20240701T120000Z", &berlin());
        assert_eq!(out, "DTEND;TZID=Europe/Berlin:20240701T140000");
    }

    #[test]
    fn utc_without_seconds_keeps_precision() {
        let out = rewrite("DTSTART:20240101T1200Z", &berlin());
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T1300");
    }

    #[test]
    fn floating_gains_tzid_digits_untouched() {
        let out = rewrite("DTSTART:20240101T120000", &berlin());
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T120000");
    }

    #[test]
    fn all_day_unchanged() {
        let line = "DTSTART;VALUE=DATE:20240101";
        assert_eq!(rewrite(line, &berlin()), line);
        assert_eq!(rewrite(line, &berlin_override()), line);
    }

    #[test]
    fn existing_tzid_kept_without_override() {
        let line = "DTSTART;TZID=America/New_York:20240101T120000";
        assert_eq!(rewrite(line, &berlin()), line);
    }

    #[test]
    fn existing_tzid_reanchored_with_override() {
        // Noon in New York (UTC-5) is 18:00 in Berlin (UTC+1)
        let out = rewrite(
            "DTSTART;TZID=America/New_York:20240101T120000",
            &berlin_override(),
        );
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T180000");
    }

    #[test]
    fn legacy_zone_name_translated_in_override() {
        let out = rewrite(
            "DTSTART;TZID=Pacific Standard Time:20240101T090000",
            &berlin_override(),
        );
        // 09:00 in Los Angeles (UTC-8) is 18:00 in Berlin (UTC+1)
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T180000");
    }

    #[test]
    fn unresolvable_source_zone_falls_back_to_utc() {
        let out = rewrite(
            "DTSTART;TZID=Not A Zone:20240101T120000",
            &berlin_override(),
        );
        assert_eq!(out, "DTSTART;TZID=Europe/Berlin:20240101T130000");
    }

    #[test]
    fn malformed_digits_leave_line_unchanged() {
        let line = "DTSTART:20241301T990000Z";
        assert_eq!(rewrite(line, &berlin()), line);

        let exdate_list = "EXDATE:20240101T120000Z,20240102T120000Z";
        assert_eq!(rewrite(exdate_list, &berlin()), exdate_list);
    }

    #[test]
    fn other_params_preserved_in_order() {
        let out = rewrite(
            "DTSTART;X-FOO=bar;TZID=America/New_York;X-BAZ=qux:20240101T120000",
            &berlin_override(),
        );
        assert_eq!(
            out,
            "DTSTART;TZID=Europe/Berlin;X-FOO=bar;X-BAZ=qux:20240101T180000"
        );
    }

    #[test]
    fn dst_gap_in_source_zone_is_fail_safe() {
        // 02:30 on 2024-03-31 does not exist in Berlin (clocks jump 02:00 -> 03:00)
        let line = "DTSTART;TZID=Europe/Berlin:20240331T023000";
        let out = rewrite(
            line,
            &TransformOptions::new("America/New_York", true),
        );
        assert_eq!(out, line);
    }

    #[test]
    fn unresolvable_target_zone_leaves_utc_line_unchanged() {
        let line = "DTSTART:20240101T120000Z";
        assert_eq!(
            rewrite(line, &TransformOptions::new("Invalid/Zone", false)),
            line
        );
    }

    #[test]
    fn idempotent_without_override() {
        let once = rewrite("DTSTART:20240101T120000Z", &berlin());
        let twice = rewrite(&once, &berlin());
        assert_eq!(once, twice);
    }
}
