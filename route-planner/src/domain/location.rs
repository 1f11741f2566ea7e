//! Location name type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid location name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location name: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// Cities renamed in recent years, mapped to their current official names.
/// Schedules from older operators still use the old spellings.
const ALIASES: &[(&str, &str)] = &[
    ("chittagong", "Chattogram"),
    ("barisal", "Barishal"),
    ("comilla", "Cumilla"),
    ("jessore", "Jashore"),
];

/// A normalized city or terminal name.
///
/// Schedule feeds disagree on spacing, letter case, and historical city
/// names, so all normalization happens here, once, at parse time: the
/// name is trimmed, internal whitespace is collapsed, each word is
/// canonically cased, and renamed cities are resolved to their current
/// names. Everything downstream (graph build, search, cache keys)
/// compares `Location` values and never touches raw strings.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Location;
///
/// let a = Location::parse("  chattogram ").unwrap();
/// let b = Location::parse("Chittagong").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "Chattogram");
///
/// // Empty names are rejected
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location(String);

impl Location {
    /// Parse and normalize a location name.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let mut words: Vec<String> = Vec::new();

        for word in s.split_whitespace() {
            let mut chars = word.chars();
            let Some(first) = chars.next() else { continue };
            let canonical: String = first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect();
            words.push(canonical);
        }

        if words.is_empty() {
            return Err(InvalidLocation {
                reason: "name must not be empty",
            });
        }

        let name = words.join(" ");

        let lower = name.to_lowercase();
        for (old, current) in ALIASES {
            if lower == *old {
                return Ok(Location((*current).to_string()));
            }
        }

        Ok(Location(name))
    }

    /// Returns the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
