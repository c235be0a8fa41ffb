//! Difficulty levels for published courses.
//!
//! The set is closed: a course is either beginner, intermediate, or advanced.
//! Parsing is case-insensitive and accepts both the English tokens and the
//! Spanish tokens used by the shipped course listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a level token cannot be matched.
#[derive(Clone, Debug, Deserialize, Error, Eq, PartialEq, Serialize)]
pub enum ParseLevelError {
    /// The token matched none of the known difficulty levels.
    #[error("unknown difficulty level: {token}")]
    Unknown {
        /// The rejected token, as supplied.
        token: String,
    },
}

/// Difficulty classification of a course.
///
/// # Examples
///
/// ```
/// use curso_core::Level;
///
/// let level: Level = "PRINCIPIANTE".parse()?;
/// assert_eq!(level, Level::Beginner);
/// assert_eq!(level.to_string(), "BEGINNER");
/// # Ok::<(), curso_core::ParseLevelError>(())
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    /// Entry-level course with no prerequisites.
    Beginner,
    /// Course assuming working knowledge of the subject.
    Intermediate,
    /// Course aimed at experienced practitioners.
    Advanced,
}

impl Level {
    /// Returns the uppercase English form of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Ok(Self::Beginner),
            "intermediate" | "intermedio" => Ok(Self::Intermediate),
            "advanced" | "avanzado" => Ok(Self::Advanced),
            _ => Err(ParseLevelError::Unknown {
                token: s.trim().to_owned(),
            }),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt::Display;

    fn expect_ok<T, E>(result: Result<T, E>, message: &str) -> T
    where
        E: Display,
    {
        match result {
            Ok(value) => value,
            Err(error) => panic!("{message}: {error}"),
        }
    }

    fn expect_err<T, E>(result: Result<T, E>, message: &str) -> E
    where
        E: Display,
    {
        match result {
            Ok(_) => panic!("{message}"),
            Err(error) => error,
        }
    }

    #[rstest]
    #[case("principiante", Level::Beginner)]
    #[case("PRINCIPIANTE", Level::Beginner)]
    #[case("beginner", Level::Beginner)]
    #[case(" Intermedio ", Level::Intermediate)]
    #[case("intermediate", Level::Intermediate)]
    #[case("AVANZADO", Level::Advanced)]
    #[case("Advanced", Level::Advanced)]
    fn parses_known_tokens(#[case] token: &str, #[case] expected: Level) {
        let level = expect_ok(token.parse::<Level>(), "known level token");
        assert_eq!(level, expected);
    }

    #[rstest]
    #[case("expert")]
    #[case("")]
    fn rejects_unknown_tokens(#[case] token: &str) {
        let error = expect_err(token.parse::<Level>(), "unknown tokens are invalid");
        assert_eq!(
            error,
            ParseLevelError::Unknown {
                token: token.trim().to_owned(),
            }
        );
    }

    #[test]
    fn converts_from_borrowed_tokens() {
        let level = expect_ok(Level::try_from("avanzado"), "known level token");
        assert_eq!(level, Level::Advanced);
    }

    #[test]
    fn displays_uppercase_english_form() {
        assert_eq!(Level::Advanced.to_string(), "ADVANCED");
    }
}
