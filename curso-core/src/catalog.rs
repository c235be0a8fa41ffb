//! The category-to-course catalogue.
//!
//! A [`Catalog`] owns an ordered mapping from uppercase [`CategoryName`] keys
//! to the courses published under each category. Keys iterate in
//! lexicographic order; courses keep their insertion order within a category.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::CategoryName;
use crate::course::{Course, CourseName, Level};

/// Error raised when a catalogue operation names a missing category.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CatalogError {
    /// The requested category holds no entry in the catalogue.
    #[error("unknown category: {category}")]
    UnknownCategory {
        /// The category that was looked up.
        category: CategoryName,
    },
}

/// Ordered mapping from category to the courses published under it.
///
/// # Examples
///
/// ```
/// use curso_core::{Catalog, CategoryName, Course, Level};
///
/// let mut catalog = Catalog::new();
/// let category = CategoryName::new("bases de datos")?;
/// let course = Course::from_parts("sql essential training", 2019, 12, 3, Level::Beginner)?;
///
/// catalog.add_course(category.clone(), course);
/// assert_eq!(catalog.total_courses_in(&category), Some(1));
/// # Ok::<(), curso_core::CursoError>(())
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<CategoryName, Vec<Course>>,
}

impl Catalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course under the given category, creating the category entry on
    /// first use and appending at the end of the sequence otherwise.
    ///
    /// Duplicate courses are not collapsed: identical records may coexist.
    pub fn add_course(&mut self, category: CategoryName, course: Course) {
        self.entries.entry(category).or_default().push(course);
    }

    /// Returns the number of courses in the given category, or `None` when
    /// the category holds no entry.
    #[must_use]
    pub fn total_courses_in(&self, category: &CategoryName) -> Option<usize> {
        self.entries.get(category).map(Vec::len)
    }

    /// Returns a read-only view of the courses in the given category, in
    /// insertion order, or `None` when the category holds no entry.
    #[must_use]
    pub fn courses_in(&self, category: &CategoryName) -> Option<&[Course]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    /// Returns every category label currently present, sorted
    /// lexicographically.
    ///
    /// Categories whose course sequence was emptied by removal still appear:
    /// a key is never dropped implicitly.
    #[must_use]
    pub fn categories(&self) -> BTreeSet<&CategoryName> {
        self.entries.keys().collect()
    }

    /// Removes every course of the given level from the given category and
    /// returns the removed names, sorted lexicographically.
    ///
    /// Non-matching courses keep their relative order. The category entry
    /// survives even when the removal empties it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] when the category holds no
    /// entry.
    pub fn remove_courses_of(
        &mut self,
        category: &CategoryName,
        level: Level,
    ) -> Result<BTreeSet<CourseName>, CatalogError> {
        let courses = self
            .entries
            .get_mut(category)
            .ok_or_else(|| CatalogError::UnknownCategory {
                category: category.clone(),
            })?;

        let mut removed = BTreeSet::new();
        courses.retain(|course| {
            if course.level() == level {
                removed.insert(course.name().clone());
                return false;
            }
            true
        });

        Ok(removed)
    }

    /// Returns the first-published course across the whole catalogue, or
    /// `None` when no course is present.
    ///
    /// Ties on the publication date resolve to the first course encountered
    /// scanning categories lexicographically and courses in insertion order.
    #[must_use]
    pub fn oldest_course(&self) -> Option<&Course> {
        self.entries
            .values()
            .flatten()
            .min_by_key(|course| course.published())
    }

    /// Returns the total number of courses across every category.
    #[must_use]
    pub fn total_courses(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Reports whether the catalogue holds no category entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the full catalogue listing into one string.
    ///
    /// Equivalent to the [`Display`](fmt::Display) output; the listing is
    /// accumulated into a single buffer rather than concatenated piecewise.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Catalog {
    /// Renders a header, then each category in sorted order with its course
    /// count, its course blocks, and a separator line.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "On-line courses offered by the platform")?;
        writeln!(formatter)?;

        for (category, courses) in &self.entries {
            writeln!(formatter, "{category} ({count})", count = courses.len())?;
            for course in courses {
                write!(formatter, "{course}")?;
            }
            writeln!(formatter, "----------")?;
        }

        Ok(())
    }
}
