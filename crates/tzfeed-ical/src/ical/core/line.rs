//! Property line parsing and re-serialization.

use super::Parameter;

/// A parsed property line: `NAME[;PARAMS]:VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
    /// Property name as written (matching is case-insensitive).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value (everything after the first unquoted colon).
    pub value: String,
}

impl PropertyLine {
    /// Parses a logical line into name, parameters, and value.
    ///
    /// The scan is quote-aware: `;` and `:` inside a quoted parameter
    /// value do not terminate it. Returns `None` when the line has no
    /// unquoted colon and therefore is not a property line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut in_quotes = false;
        let mut segment_start = 0;
        let mut name: Option<&str> = None;
        let mut params = Vec::new();

        for (i, c) in line.char_indices() {
            match c {
                '"' => in_quotes = !in_quotes,
                ';' if !in_quotes => {
                    let segment = &line[segment_start..i];
                    match name {
                        None => name = Some(segment),
                        Some(_) => params.push(Parameter::from_raw(segment)),
                    }
                    segment_start = i + 1;
                }
                ':' if !in_quotes => {
                    let segment = &line[segment_start..i];
                    match name {
                        None => name = Some(segment),
                        Some(_) => params.push(Parameter::from_raw(segment)),
                    }
                    let name = name?;
                    if name.is_empty() {
                        return None;
                    }
                    return Some(Self {
                        name: name.to_string(),
                        params,
                        value: line[i + 1..].to_string(),
                    });
                }
                _ => {}
            }
        }

        None
    }

    /// Returns whether the property name matches (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.is_named(name))
    }

    /// Returns the TZID parameter value, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param("TZID").map(Parameter::value)
    }

    /// Returns whether a parameter has the given value (case-insensitive).
    #[must_use]
    pub fn has_param_value(&self, name: &str, value: &str) -> bool {
        self.get_param(name)
            .is_some_and(|p| p.value().eq_ignore_ascii_case(value))
    }

    /// Replaces any existing TZID parameter with one for `zone`.
    ///
    /// The new parameter is inserted first; the relative order of the
    /// remaining parameters is preserved.
    pub fn set_tzid(&mut self, zone: &str) {
        self.params.retain(|p| !p.is_named("TZID"));
        self.params.insert(0, Parameter::tzid(zone));
    }

    /// Re-serializes the line as `NAME[;PARAMS]:VALUE`.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = self.name.clone();
        for param in &self.params {
            out.push(';');
            out.push_str(param.as_raw());
        }
        out.push(':');
        out.push_str(&self.value);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let line = PropertyLine::parse("SUMMARY:Team Meeting").unwrap();
        assert_eq!(line.name, "SUMMARY");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "Team Meeting");
    }

    #[test]
    fn parse_with_params() {
        let line = PropertyLine::parse("DTSTART;TZID=Europe/Berlin:20240101T120000").unwrap();
        assert_eq!(line.name, "DTSTART");
        assert_eq!(line.tzid(), Some("Europe/Berlin"));
        assert_eq!(line.value, "20240101T120000");
    }

    #[test]
    fn parse_quoted_param_with_separators() {
        let line = PropertyLine::parse("ATTENDEE;CN=\"Doe; Jane\":mailto:jane@example.com")
            .unwrap();
        assert_eq!(line.params[0].value(), "Doe; Jane");
        assert_eq!(line.value, "mailto:jane@example.com");
    }

    #[test]
    fn parse_rejects_no_colon() {
        assert!(PropertyLine::parse("NOT A PROPERTY").is_none());
        assert!(PropertyLine::parse(":leading-colon").is_none());
    }

    #[test]
    fn set_tzid_replaces_and_leads() {
        let mut line =
            PropertyLine::parse("DTSTART;X-FOO=1;TZID=America/New_York:20240101T120000").unwrap();
        line.set_tzid("Europe/Berlin");
        assert_eq!(
            line.to_line(),
            "DTSTART;TZID=Europe/Berlin;X-FOO=1:20240101T120000"
        );
    }

    #[test]
    fn round_trip_untouched() {
        let raw = "DTSTART;TZID=\"Europe/Berlin\";X-A=1:20240101T120000";
        let line = PropertyLine::parse(raw).unwrap();
        assert_eq!(line.to_line(), raw);
    }

    #[test]
    fn value_date_param_detected() {
        let line = PropertyLine::parse("DTSTART;VALUE=DATE:20240101").unwrap();
        assert!(line.has_param_value("VALUE", "date"));
    }
}
