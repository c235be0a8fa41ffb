//! Flat-file ingestion for the curso course catalogue.
//!
//! Each record occupies one line of the form
//! `category:name:day/month/year:level`. Fields are trimmed of surrounding
//! whitespace, the date is day-first, and the level token matches the closed
//! set case-insensitively. Ingestion fails hard on the first malformed
//! record, reporting its 1-based line number; whitespace-only lines are
//! skipped so trailing newlines do not abort a well-formed file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use curso_core::{
    Catalog, CategoryName, CategoryNameError, Course, CourseName, CourseNameError, DateError,
    Level, ParseLevelError, PublicationDate,
};
use thiserror::Error;

/// Error raised when a single record line fails to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RecordError {
    /// The line did not split into exactly four `:`-separated fields.
    #[error("expected 4 fields separated by ':', found {found}")]
    FieldCount {
        /// Number of fields the line actually contained.
        found: usize,
    },

    /// The category field failed validation.
    #[error(transparent)]
    Category(#[from] CategoryNameError),

    /// The course name field failed validation.
    #[error(transparent)]
    Name(#[from] CourseNameError),

    /// The date field was not three `/`-separated numeric components.
    #[error("malformed date: {text}")]
    DateSyntax {
        /// The rejected date field, as supplied.
        text: String,
    },

    /// The date components named no real calendar date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The level token matched none of the known difficulty levels.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}

/// Error raised when ingestion of a data source fails.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A record line failed to parse; ingestion stops at the first failure.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number of the offending record.
        line: usize,
        /// The underlying parse failure.
        source: RecordError,
    },

    /// The data source could not be read.
    #[error("failed to read course data")]
    Io(#[from] io::Error),
}

/// Parses one record line into its category and course.
///
/// # Errors
///
/// Returns a [`RecordError`] describing the first malformed field: wrong
/// field count, empty category or name, malformed or impossible date, or an
/// unknown level token.
///
/// # Examples
///
/// ```
/// use curso_ingest::parse_record;
///
/// let (category, course) =
///     parse_record("BASES DE DATOS:sql essential training:03/12/2019:principiante")?;
/// assert_eq!(category.as_str(), "BASES DE DATOS");
/// assert_eq!(course.name().as_str(), "Sql Essential Training ");
/// # Ok::<(), curso_ingest::RecordError>(())
/// ```
pub fn parse_record(line: &str) -> Result<(CategoryName, Course), RecordError> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();

    let [category_field, name_field, date_field, level_field] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    let category = CategoryName::new(*category_field)?;
    let name = CourseName::new(*name_field)?;
    let published = parse_date(date_field)?;
    let level: Level = level_field.parse()?;

    Ok((category, Course::new(name, published, level)))
}

/// Parses a `day/month/year` field into a publication date.
fn parse_date(text: &str) -> Result<PublicationDate, RecordError> {
    let mut components = text.split('/');

    let (Some(day_text), Some(month_text), Some(year_text), None) = (
        components.next(),
        components.next(),
        components.next(),
        components.next(),
    ) else {
        return Err(RecordError::DateSyntax {
            text: text.to_owned(),
        });
    };

    let day = parse_component(day_text, text)?;
    let month = parse_component(month_text, text)?;
    let year = parse_component(year_text, text)?;

    Ok(PublicationDate::from_ymd(year, month, day)?)
}

/// Parses one numeric date component, reporting the whole field on failure.
fn parse_component<N>(component: &str, field: &str) -> Result<N, RecordError>
where
    N: std::str::FromStr,
{
    component
        .trim()
        .parse()
        .map_err(|_| RecordError::DateSyntax {
            text: field.to_owned(),
        })
}

/// Ingests every record of the given text into a fresh catalogue.
///
/// # Errors
///
/// Returns [`IngestError::Record`] carrying the 1-based line number of the
/// first malformed record. No partial recovery is attempted: a single bad
/// line fails the whole ingestion.
///
/// # Examples
///
/// ```
/// use curso_ingest::ingest_str;
///
/// let catalog = ingest_str("cms:wordpress plugin development:30/11/2011:intermedio\n")?;
/// assert_eq!(catalog.total_courses(), 1);
/// # Ok::<(), curso_ingest::IngestError>(())
/// ```
pub fn ingest_str(input: &str) -> Result<Catalog, IngestError> {
    let mut catalog = Catalog::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (category, course) = parse_record(line).map_err(|source| IngestError::Record {
            line: index + 1,
            source,
        })?;
        catalog.add_course(category, course);
    }

    Ok(catalog)
}

/// Ingests every record read from the given source into a fresh catalogue.
///
/// # Errors
///
/// Returns [`IngestError::Io`] when the source cannot be read, or
/// [`IngestError::Record`] for the first malformed record.
pub fn ingest_reader<R>(mut reader: R) -> Result<Catalog, IngestError>
where
    R: BufRead,
{
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    ingest_str(&buffer)
}

/// Opens the given file and ingests its records into a fresh catalogue.
///
/// # Errors
///
/// Returns [`IngestError::Io`] when the file cannot be opened or read, or
/// [`IngestError::Record`] for the first malformed record.
pub fn ingest_path<P>(path: P) -> Result<Catalog, IngestError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;

    ingest_reader(BufReader::new(file))
}
