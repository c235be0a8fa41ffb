//! Common testing utilities shared across workspace crates.
//!
//! The helpers here allow integration and unit tests to share assertion logic
//! and fixture builders without duplicating small but noisy adapters.

use std::fmt::Display;

use curso_core::{Catalog, CategoryName, Course, Level};

/// Extracts the success value from a result or panics with context.
///
/// This helper keeps tests expressive by collapsing [`Result`] handling down
/// to a single call. It accepts any [`Result`] whose error implements
/// [`Display`], making it suitable for both `anyhow::Result` and concrete
/// error enums.
///
/// # Examples
///
/// ```
/// use curso_test_helpers::expect_valid;
///
/// let value = expect_valid(Ok::<_, curso_core::CursoError>(42), "demo");
/// assert_eq!(value, 42);
/// ```
///
/// # Panics
///
/// Panics with a message prefixed by `context` when the result is an error,
/// so failures remain easy to trace back to their scenario.
pub fn expect_valid<T, E>(result: Result<T, E>, context: &str) -> T
where
    E: Display,
{
    match result {
        Ok(value) => value,
        Err(error) => panic!("{context}: {error}"),
    }
}

/// Extracts the error from a result or panics with context.
///
/// The inverse of [`expect_valid`]: scenarios asserting on validation
/// failures use this to reach the error without `unwrap` noise.
///
/// # Panics
///
/// Panics with the supplied `context` when the result is a success.
pub fn expect_invalid<T, E>(result: Result<T, E>, context: &str) -> E {
    match result {
        Ok(_) => panic!("{context}: operation unexpectedly succeeded"),
        Err(error) => error,
    }
}

/// Builds a course from raw parts for use in fixtures.
///
/// # Panics
///
/// Panics when the name or date fails validation; fixtures are expected to
/// supply well-formed values.
#[must_use]
pub fn sample_course(name: &str, year: i32, month: u32, day: u32, level: Level) -> Course {
    expect_valid(
        Course::from_parts(name, year, month, day, level),
        "fixture course must be valid",
    )
}

/// Builds a category label from raw text for use in fixtures.
///
/// # Panics
///
/// Panics when the label fails validation; fixtures are expected to supply
/// well-formed values.
#[must_use]
pub fn sample_category(label: &str) -> CategoryName {
    expect_valid(
        CategoryName::new(label),
        "fixture category must be valid",
    )
}

/// Builds a small catalogue spanning three categories and all three levels.
///
/// The fixture mirrors the shipped sample data closely enough for listing and
/// aggregate assertions: the oldest course is `Wordpress Plugin Development `
/// (30 November 2011) under `CMS`.
///
/// # Panics
///
/// Panics only if the fixture data itself were malformed, which would be a
/// defect in the helper.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.add_course(
        sample_category("bases de datos"),
        sample_course("sql essential training", 2019, 12, 3, Level::Beginner),
    );
    catalog.add_course(
        sample_category("bases de datos"),
        sample_course("sql avanzado para analistas", 2017, 5, 21, Level::Advanced),
    );
    catalog.add_course(
        sample_category("cms"),
        sample_course("wordpress plugin development", 2011, 11, 30, Level::Intermediate),
    );
    catalog.add_course(
        sample_category("programacion"),
        sample_course("rust fundamentals", 2021, 9, 14, Level::Beginner),
    );

    catalog
}
