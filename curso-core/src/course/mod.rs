//! The course record: a validated name, a publication date, and a
//! difficulty level, immutable once constructed.

mod date;
mod level;
mod name;

pub use date::{DateError, PublicationDate};
pub use level::{Level, ParseLevelError};
pub use name::{CourseName, CourseNameError};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CursoError;

/// Width of the label column in the rendered course block.
const LABEL_WIDTH: usize = 20;

/// A published course.
///
/// Courses are immutable after construction; every component is validated by
/// its own type before the record exists.
///
/// # Examples
///
/// ```
/// use curso_core::{Course, Level};
///
/// let course = Course::from_parts("  sql essential training ", 2019, 12, 3, Level::Beginner)?;
/// assert_eq!(course.name().as_str(), "Sql Essential Training ");
/// assert_eq!(course.level(), Level::Beginner);
/// # Ok::<(), curso_core::CursoError>(())
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Course {
    name: CourseName,
    published: PublicationDate,
    level: Level,
}

impl Course {
    /// Builds a course from fully validated components.
    #[must_use]
    pub const fn new(name: CourseName, published: PublicationDate, level: Level) -> Self {
        Self {
            name,
            published,
            level,
        }
    }

    /// Validates a raw name and date before creating the course.
    ///
    /// # Errors
    ///
    /// Returns [`CourseNameError::Empty`] (wrapped) when the name trims to an
    /// empty string, or [`DateError::InvalidDate`] (wrapped) when the
    /// components name no real calendar date.
    pub fn from_parts(
        name: &str,
        year: i32,
        month: u32,
        day: u32,
        level: Level,
    ) -> Result<Self, CursoError> {
        let validated_name = CourseName::new(name)?;
        let published = PublicationDate::from_ymd(year, month, day)?;

        Ok(Self::new(validated_name, published, level))
    }

    /// Returns the normalised course name.
    #[must_use]
    pub const fn name(&self) -> &CourseName {
        &self.name
    }

    /// Returns the publication date.
    #[must_use]
    pub const fn published(&self) -> PublicationDate {
        self.published
    }

    /// Returns the difficulty level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl fmt::Display for Course {
    /// Renders the labelled block: name, long-form publication date, and
    /// level, each label right-aligned in a fixed-width column, followed by a
    /// blank line.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "{label:>width$}: {}",
            self.name,
            label = "Name",
            width = LABEL_WIDTH
        )?;
        writeln!(
            formatter,
            "{label:>width$}: {}",
            self.published.long_format(),
            label = "Published since",
            width = LABEL_WIDTH
        )?;
        writeln!(
            formatter,
            "{label:>width$}: {}",
            self.level,
            label = "Level",
            width = LABEL_WIDTH
        )?;
        writeln!(formatter)
    }
}
