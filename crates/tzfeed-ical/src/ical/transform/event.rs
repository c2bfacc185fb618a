//! Event block normalization.
//!
//! Runs when an event's close marker is reached: repairs the
//! DESCRIPTION field and re-emits all fields in canonical order.

use crate::ical::core::PropertyLine;

/// Canonical field emission order for VEVENT blocks.
///
/// Fields not listed here but without an extension prefix follow in
/// original relative order; `X-` extension fields come last.
pub const CANONICAL_FIELD_ORDER: [&str; 23] = [
    "UID",
    "DTSTAMP",
    "DTSTART",
    "DTEND",
    "DURATION",
    "RRULE",
    "RDATE",
    "EXDATE",
    "EXRULE",
    "RECURRENCE-ID",
    "SUMMARY",
    "DESCRIPTION",
    "LOCATION",
    "CLASS",
    "PRIORITY",
    "TRANSP",
    "STATUS",
    "SEQUENCE",
    "ORGANIZER",
    "ATTENDEE",
    "CREATED",
    "LAST-MODIFIED",
    "URL",
];

/// Maximum characters on the first physical DESCRIPTION line.
const DESCRIPTION_FIRST_UNITS: usize = 75;
/// Maximum characters on DESCRIPTION continuation lines (before the
/// single space prefix).
const DESCRIPTION_CONT_UNITS: usize = 74;

/// One field of an event block: a property line plus any continuation
/// lines that belong to it.
#[derive(Debug)]
struct Field {
    name: String,
    lines: Vec<String>,
}

/// ## Summary
/// Normalizes the interior lines of one event block.
///
/// The block's open/close markers are re-attached by the caller.
#[must_use]
pub fn normalize_event(lines: &[String]) -> Vec<String> {
    let mut fields = classify_fields(lines);

    repair_descriptions(&mut fields);

    let mut canonical: Vec<Field> = Vec::with_capacity(fields.len());
    let mut other: Vec<Field> = Vec::new();
    let mut extensions: Vec<Field> = Vec::new();

    for name in CANONICAL_FIELD_ORDER {
        let mut i = 0;
        while i < fields.len() {
            if fields[i].name.eq_ignore_ascii_case(name) {
                canonical.push(fields.remove(i));
            } else {
                i += 1;
            }
        }
    }

    for field in fields {
        if field
            .name
            .get(..2)
            .is_some_and(|p| p.eq_ignore_ascii_case("X-"))
        {
            extensions.push(field);
        } else {
            other.push(field);
        }
    }

    canonical
        .into_iter()
        .chain(other)
        .chain(extensions)
        .flat_map(|f| f.lines)
        .collect()
}

/// Attributes each line to its field; continuation lines (leading
/// space or tab) attach to the immediately preceding field.
fn classify_fields(lines: &[String]) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::new();

    for line in lines {
        if line.starts_with([' ', '\t']) {
            if let Some(last) = fields.last_mut() {
                last.lines.push(line.clone());
                continue;
            }
        }
        let name = line
            .split_once([';', ':'])
            .map_or(line.as_str(), |(n, _)| n)
            .to_string();
        fields.push(Field {
            name,
            lines: vec![line.clone()],
        });
    }

    fields
}

/// Reassembles, cleans, and re-segments every DESCRIPTION field.
///
/// Fields whose cleaned content is empty are dropped entirely.
fn repair_descriptions(fields: &mut Vec<Field>) {
    fields.retain_mut(|field| {
        if !field.name.eq_ignore_ascii_case("DESCRIPTION") {
            return true;
        }
        match repaired_description_lines(&field.lines) {
            Some(lines) => {
                field.lines = lines;
                true
            }
            None => false,
        }
    });
}

/// Returns the repaired physical lines for one DESCRIPTION field, or
/// `None` when the cleaned content is empty.
fn repaired_description_lines(lines: &[String]) -> Option<Vec<String>> {
    let mut joined = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            joined.push_str(line);
        } else {
            joined.push_str(line.strip_prefix([' ', '\t']).unwrap_or(line));
        }
    }

    // Not a parseable property line: leave the field as it came in.
    let Some(prop) = PropertyLine::parse(&joined) else {
        return Some(lines.to_vec());
    };
    let prefix_len = joined.len() - prop.value.len();
    let content = clean_description(&prop.value);
    if content.is_empty() {
        return None;
    }

    let full = format!("{}{}", &joined[..prefix_len], content);
    Some(segment_description(&full))
}

/// Strips malformed trailing line-break artifacts: a trailing `\n`
/// escape sequence or stray literal newline characters.
fn clean_description(value: &str) -> String {
    let mut content = value.to_string();
    loop {
        if let Some(stripped) = content.strip_suffix("\\n") {
            content.truncate(stripped.len());
        } else if content.ends_with(['\n', '\r']) {
            content.pop();
        } else {
            break;
        }
    }
    content
}

/// Splits the repaired line using the 75/74 rule so the generic folder
/// sees already-correctly-sized lines.
fn segment_description(full: &str) -> Vec<String> {
    let chars: Vec<char> = full.chars().collect();
    if chars.len() <= DESCRIPTION_FIRST_UNITS {
        return vec![full.to_string()];
    }

    let mut out: Vec<String> = vec![chars[..DESCRIPTION_FIRST_UNITS].iter().collect()];
    for chunk in chars[DESCRIPTION_FIRST_UNITS..].chunks(DESCRIPTION_CONT_UNITS) {
        let mut line = String::with_capacity(DESCRIPTION_CONT_UNITS + 1);
        line.push(' ');
        line.extend(chunk.iter());
        out.push(line);
    }
    out
}
