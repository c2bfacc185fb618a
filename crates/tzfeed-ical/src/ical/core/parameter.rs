//! Property parameter type.

/// A single `KEY=VALUE` property parameter.
///
/// The raw text is preserved as written so that untouched parameters
/// round-trip exactly, including quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    raw: String,
}

impl Parameter {
    /// Creates a parameter from its raw `KEY=VALUE` text.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Creates a parameter from a name and an unquoted value.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            raw: format!("{name}={value}"),
        }
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(zone: &str) -> Self {
        Self::new("TZID", zone)
    }

    /// Parameter name (text before the first `=`).
    #[must_use]
    pub fn name(&self) -> &str {
        self.raw.split_once('=').map_or(self.raw.as_str(), |(n, _)| n)
    }

    /// Parameter value with surrounding quotes stripped.
    #[must_use]
    pub fn value(&self) -> &str {
        let v = self.raw.split_once('=').map_or("", |(_, v)| v);
        v.strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(v)
    }

    /// Raw `KEY=VALUE` text as written.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}
