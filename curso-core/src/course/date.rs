//! Validated publication dates and their long-form rendering.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a publication date fails calendar validation.
#[derive(Clone, Debug, Deserialize, Error, Eq, PartialEq, Serialize)]
pub enum DateError {
    /// The day/month/year combination names no real calendar date.
    #[error("{day:02}/{month:02}/{year} is not a valid calendar date")]
    InvalidDate {
        /// Year component as supplied.
        year: i32,
        /// Month component as supplied.
        month: u32,
        /// Day component as supplied.
        day: u32,
    },
}

/// Calendar date on which a course was published.
///
/// The long-form rendering uses the full English month name, e.g.
/// `"03 December 2019"`.
///
/// # Examples
///
/// ```
/// use curso_core::{DateError, PublicationDate};
///
/// let date = PublicationDate::from_ymd(2019, 12, 3)?;
/// assert_eq!(date.long_format(), "03 December 2019");
/// # Ok::<(), DateError>(())
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PublicationDate(NaiveDate);

impl PublicationDate {
    /// Builds a publication date from year, month, and day components.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] when the components name no real
    /// calendar date, such as 30 February.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Renders the date as `"DD MonthName YYYY"` with the full English month
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use curso_core::{DateError, PublicationDate};
    ///
    /// let date = PublicationDate::from_ymd(2011, 11, 30)?;
    /// assert_eq!(date.long_format(), "30 November 2011");
    /// # Ok::<(), DateError>(())
    /// ```
    #[must_use]
    pub fn long_format(self) -> String {
        self.0.format("%d %B %Y").to_string()
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.long_format())
    }
}

impl From<NaiveDate> for PublicationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}
