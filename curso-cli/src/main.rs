//! Demo driver for the curso course catalogue.
//!
//! Loads a course data file, prints the full listing, reports the oldest
//! course, applies the requested category/level removals, and prints the
//! listing again. The binary is deliberately a thin layer over the
//! `curso-core` and `curso-ingest` crates.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use curso_core::{Catalog, CategoryName, Level};
use curso_ingest::ingest_path;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "curso", about = "Browse and prune a catalogue of on-line courses")]
struct Cli {
    /// Course data file, one `category:name:day/month/year:level` record per
    /// line.
    file: PathBuf,

    /// Category and level to prune, as `CATEGORY:LEVEL`; repeatable.
    #[arg(long = "remove", value_name = "CATEGORY:LEVEL")]
    removals: Vec<RemovalSpec>,
}

/// One `CATEGORY:LEVEL` removal requested on the command line.
#[derive(Clone, Debug)]
struct RemovalSpec {
    category: CategoryName,
    level: Level,
}

impl FromStr for RemovalSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category_text, level_text) = s
            .rsplit_once(':')
            .context("expected CATEGORY:LEVEL, e.g. \"bases de datos:avanzado\"")?;

        Ok(Self {
            category: category_text.parse()?,
            level: level_text.parse()?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = ingest_path(&cli.file)
        .with_context(|| format!("failed to load courses from {}", cli.file.display()))?;

    let mut out = io::stdout().lock();
    report(&mut out, &catalog)?;

    for spec in &cli.removals {
        apply_removal(&mut out, &mut catalog, spec)?;
    }

    if !cli.removals.is_empty() {
        writeln!(out, "After removals...")?;
        writeln!(out)?;
        report(&mut out, &catalog)?;
    }

    Ok(())
}

/// Prints the catalogue listing and the oldest-course line.
fn report<W>(out: &mut W, catalog: &Catalog) -> Result<()>
where
    W: Write,
{
    write!(out, "{catalog}")?;

    let oldest_line = catalog.oldest_course().map_or_else(
        || String::from("The catalogue holds no courses"),
        |course| format!("Oldest course: {}", course.name()),
    );
    writeln!(out, "{oldest_line}")?;
    writeln!(out)?;

    Ok(())
}

/// Removes one category/level combination and prints the removed names.
fn apply_removal<W>(out: &mut W, catalog: &mut Catalog, spec: &RemovalSpec) -> Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "Removing courses of {} at level {}",
        spec.category, spec.level
    )?;

    let removed = catalog
        .remove_courses_of(&spec.category, spec.level)
        .with_context(|| format!("cannot remove courses of {}", spec.category))?;

    if removed.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for name in &removed {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;

    Ok(())
}
