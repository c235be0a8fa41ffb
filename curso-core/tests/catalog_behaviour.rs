//! Behaviour tests for catalogue queries and removals over a populated
//! fixture.

use anyhow::{Context, Result, ensure};
use curso_core::{Catalog, CategoryName, CourseName, Level};
use curso_test_helpers::{expect_valid, sample_catalog, sample_category, sample_course};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> Catalog {
    sample_catalog()
}

#[rstest]
fn categories_list_sorted_and_uppercase(catalog: Catalog) -> Result<()> {
    let labels: Vec<&str> = catalog
        .categories()
        .into_iter()
        .map(CategoryName::as_str)
        .collect();

    ensure!(
        labels == vec!["BASES DE DATOS", "CMS", "PROGRAMACION"],
        "unexpected category listing: {labels:?}"
    );
    Ok(())
}

#[rstest]
#[case("bases de datos", Some(2))]
#[case("CMS", Some(1))]
#[case("historia", None)]
fn counts_follow_the_normalised_key(
    catalog: Catalog,
    #[case] label: &str,
    #[case] expected: Option<usize>,
) -> Result<()> {
    let count = catalog.total_courses_in(&sample_category(label));

    ensure!(
        count == expected,
        "category {label} should count {expected:?}, got {count:?}"
    );
    Ok(())
}

#[rstest]
fn oldest_course_spans_every_category(catalog: Catalog) -> Result<()> {
    let oldest = catalog
        .oldest_course()
        .context("populated catalogue must report an oldest course")?;

    ensure!(
        oldest.name().as_str() == "Wordpress Plugin Development ",
        "unexpected oldest course: {}",
        oldest.name()
    );
    ensure!(
        oldest.published().long_format() == "30 November 2011",
        "unexpected publication date: {}",
        oldest.published()
    );
    Ok(())
}

#[rstest]
fn removal_prunes_one_level_and_reports_names(mut catalog: Catalog) -> Result<()> {
    let category = sample_category("bases de datos");
    catalog.add_course(
        category.clone(),
        sample_course("postgresql a fondo", 2020, 4, 18, Level::Advanced),
    );

    let removed = expect_valid(
        catalog.remove_courses_of(&category, Level::Advanced),
        "known category",
    );
    let removed_names: Vec<&str> = removed.iter().map(CourseName::as_str).collect();

    ensure!(
        removed_names == vec!["Postgresql A Fondo ", "Sql Avanzado Para Analistas "],
        "removed names must come back sorted: {removed_names:?}"
    );
    ensure!(
        catalog.total_courses_in(&category) == Some(1),
        "only the beginner course should survive"
    );

    let survivor_names: Vec<&str> = catalog
        .courses_in(&category)
        .context("pruned category must remain present")?
        .iter()
        .map(|course| course.name().as_str())
        .collect();
    ensure!(
        survivor_names == vec!["Sql Essential Training "],
        "survivors must keep their order: {survivor_names:?}"
    );
    Ok(())
}

#[rstest]
fn removal_keeps_the_emptied_category_listed(mut catalog: Catalog) -> Result<()> {
    let category = sample_category("cms");

    let removed = expect_valid(
        catalog.remove_courses_of(&category, Level::Intermediate),
        "known category",
    );

    ensure!(removed.len() == 1, "one intermediate course under CMS");
    ensure!(
        catalog.total_courses_in(&category) == Some(0),
        "CMS must stay present with zero courses"
    );
    ensure!(
        catalog.categories().contains(&category),
        "emptied categories must keep their key"
    );
    Ok(())
}

#[rstest]
fn listing_shows_each_category_with_its_count(catalog: Catalog) -> Result<()> {
    let listing = catalog.render();

    ensure!(
        listing.starts_with("On-line courses offered by the platform\n\n"),
        "listing must open with the platform header"
    );
    for expected in [
        "BASES DE DATOS (2)",
        "CMS (1)",
        "PROGRAMACION (1)",
        "                Name: Sql Essential Training \n",
        "     Published since: 03 December 2019\n",
        "               Level: BEGINNER\n",
        "----------",
    ] {
        ensure!(
            listing.contains(expected),
            "listing should contain {expected:?}"
        );
    }
    Ok(())
}

#[rstest]
fn serde_round_trip_preserves_the_catalogue(catalog: Catalog) -> Result<()> {
    let payload = serde_json::to_string(&catalog).context("catalogue must serialise")?;
    let restored: Catalog =
        serde_json::from_str(&payload).context("catalogue must deserialise")?;

    ensure!(restored == catalog, "round trip must preserve every entry");
    Ok(())
}
