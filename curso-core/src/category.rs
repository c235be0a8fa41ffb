//! Provides the validated category label used as the catalogue key,
//! guaranteeing trimmed, uppercase, non-empty text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a [`CategoryName`] fails validation.
#[derive(Clone, Debug, Deserialize, Error, Eq, PartialEq, Serialize)]
pub enum CategoryNameError {
    /// The provided category was empty after trimming whitespace.
    #[error("category name may not be empty")]
    Empty,
}

/// Uppercase label grouping courses inside a [`Catalog`].
///
/// Construction trims and uppercases the input, so every insert and lookup is
/// normalised at the boundary and the catalogue never sees two spellings of
/// the same category.
///
/// # Examples
///
/// ```
/// use curso_core::{CategoryName, CategoryNameError};
///
/// let category = CategoryName::new(" bases de datos ")?;
/// assert_eq!(category.as_str(), "BASES DE DATOS");
/// # Ok::<(), CategoryNameError>(())
/// ```
///
/// [`Catalog`]: crate::Catalog
#[derive(Clone, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated, uppercase category label.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNameError::Empty`] when the trimmed input is empty.
    pub fn new<S>(value: S) -> Result<Self, CategoryNameError>
    where
        S: Into<String>,
    {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CategoryNameError::Empty);
        }

        Ok(Self(trimmed.to_uppercase()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CategoryName {
    type Err = CategoryNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = CategoryNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}
