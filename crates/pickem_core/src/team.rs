//! Team codes.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A team identifier as it appears in the picks and schedule sheets ("KC", "PHI").
///
/// Codes are compared exactly after trimming surrounding whitespace; no case
/// folding happens here so that a mistyped pick shows up as `no_game`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    /// Build a team from a raw cell. Empty or whitespace-only cells are no pick.
    pub fn parse(raw: &str) -> Option<Team> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Team(trimmed.to_string()))
        }
    }

    /// Same as [`Team::parse`] for an optional cell.
    pub fn parse_opt(raw: Option<&str>) -> Option<Team> {
        raw.and_then(Team::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased code, used where picks are grouped for display.
    pub fn normalized(&self) -> String {
        self.0.to_uppercase()
    }
}

impl Borrow<str> for Team {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Team {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_rejects_blank() {
        assert_eq!(Team::parse("  KC ").unwrap().as_str(), "KC");
        assert!(Team::parse("").is_none());
        assert!(Team::parse("   ").is_none());
        assert!(Team::parse_opt(None).is_none());
    }

    #[test]
    fn test_normalized_upper_cases() {
        assert_eq!(Team::parse("sf").unwrap().normalized(), "SF");
    }
}
