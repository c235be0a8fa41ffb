//! Core data model for the curso course catalogue.
//!
//! The crate concentrates on the canonical types of the platform: the
//! validated [`Course`] record (capitalised name, publication date,
//! difficulty level) and the [`Catalog`] mapping uppercase categories to
//! their ordered course sequences. Ingestion of the flat-file record format
//! lives in the companion `curso-ingest` crate.

mod catalog;
mod category;
mod course;

pub use catalog::{Catalog, CatalogError};
pub use category::{CategoryName, CategoryNameError};
pub use course::{
    Course, CourseName, CourseNameError, DateError, Level, ParseLevelError, PublicationDate,
};

use thiserror::Error;

/// Umbrella error covering every validation failure in the data model.
///
/// Each component type raises its own narrow error; this enum lets callers
/// funnel mixed validation through a single `Result` type.
///
/// # Examples
///
/// ```
/// use curso_core::{Course, CursoError, Level};
///
/// let course = Course::from_parts("sql essential training", 2019, 12, 3, Level::Beginner)?;
/// assert_eq!(course.published().long_format(), "03 December 2019");
/// # Ok::<(), CursoError>(())
/// ```
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CursoError {
    /// A course name failed validation.
    #[error(transparent)]
    CourseName(#[from] CourseNameError),

    /// A category label failed validation.
    #[error(transparent)]
    CategoryName(#[from] CategoryNameError),

    /// A difficulty level token failed to parse.
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    /// A publication date failed calendar validation.
    #[error(transparent)]
    Date(#[from] DateError),

    /// A catalogue operation named a missing category.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_error_preserves_the_component_message() {
        let error = CursoError::from(CourseNameError::Empty);

        assert_eq!(error.to_string(), "course name may not be empty");
    }
}
