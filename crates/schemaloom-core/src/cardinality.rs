//! Property cardinality bounds.
//!
//! The maximum cardinality of a property is a tagged variant rather than a
//! string carrying the `"n"` sentinel. Loader-side text forms parse via
//! [`FromStr`] and [`Display`] round-trips back to them; the translation of
//! `Unbounded` to the interchange marker `"*"` happens only at the
//! serialization boundary in the publisher, never here.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on how many times a property may occur.
///
/// # Examples
///
/// ```
/// use schemaloom_core::MaxCardinality;
///
/// let bounded: MaxCardinality = "3".parse().unwrap();
/// assert_eq!(bounded, MaxCardinality::Bounded(3));
///
/// let unbounded: MaxCardinality = "n".parse().unwrap();
/// assert_eq!(unbounded, MaxCardinality::Unbounded);
/// assert_eq!(unbounded.to_string(), "n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MaxCardinality {
    /// At most this many occurrences.
    Bounded(u64),
    /// No upper limit.
    Unbounded,
}

impl MaxCardinality {
    /// Returns `true` for the unbounded variant.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, MaxCardinality::Unbounded)
    }
}

/// Error returned when a maximum cardinality text form does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid maximum cardinality `{text}`: expected a non-negative integer or `n`")]
pub struct ParseMaxCardinalityError {
    text: String,
}

impl FromStr for MaxCardinality {
    type Err = ParseMaxCardinalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "n" {
            return Ok(Self::Unbounded);
        }
        s.parse::<u64>()
            .map(Self::Bounded)
            .map_err(|_| ParseMaxCardinalityError { text: s.to_string() })
    }
}

impl fmt::Display for MaxCardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxCardinality::Bounded(value) => write!(f, "{value}"),
            MaxCardinality::Unbounded => write!(f, "n"),
        }
    }
}

impl TryFrom<String> for MaxCardinality {
    type Error = ParseMaxCardinalityError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<MaxCardinality> for String {
    fn from(cardinality: MaxCardinality) -> Self {
        cardinality.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded() {
        assert_eq!("0".parse(), Ok(MaxCardinality::Bounded(0)));
        assert_eq!("42".parse(), Ok(MaxCardinality::Bounded(42)));
    }

    #[test]
    fn test_parse_unbounded_sentinel() {
        assert_eq!("n".parse(), Ok(MaxCardinality::Unbounded));
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert!("N".parse::<MaxCardinality>().is_err());
        assert!("*".parse::<MaxCardinality>().is_err());
        assert!("-1".parse::<MaxCardinality>().is_err());
        assert!("".parse::<MaxCardinality>().is_err());
        assert!("many".parse::<MaxCardinality>().is_err());
    }

    #[test]
    fn test_display_round_trips_source_form() {
        assert_eq!(MaxCardinality::Bounded(7).to_string(), "7");
        assert_eq!(MaxCardinality::Unbounded.to_string(), "n");
    }

    #[test]
    fn test_parse_error_names_the_input() {
        let err = "lots".parse::<MaxCardinality>().unwrap_err();
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_is_unbounded() {
        assert!(MaxCardinality::Unbounded.is_unbounded());
        assert!(!MaxCardinality::Bounded(0).is_unbounded());
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn bounded_text_round_trips(value in any::<u64>()) {
            let parsed: MaxCardinality = value.to_string().parse().unwrap();
            prop_assert_eq!(parsed, MaxCardinality::Bounded(value));
            prop_assert_eq!(parsed.to_string(), value.to_string());
        }

        #[test]
        fn alphabetic_text_never_parses(text in "[a-mo-z][a-z]{0,8}") {
            // Excludes the bare "n" sentinel by construction.
            prop_assert!(text.parse::<MaxCardinality>().is_err());
        }
    }
}
