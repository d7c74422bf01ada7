use crate::store::catalog::{CatalogQuery, CatalogStore, SortKey, SortOrder};

use super::*;

fn catalog() -> CatalogStore {
    let mut art = course(1, 3, 70.0);
    art.name = Some("Art".to_string());
    art.location = "Golders Green".to_string();

    let mut chess = course(2, 8, 60.0);
    chess.name = Some("Chess".to_string());
    chess.location = "Mill Hill".to_string();

    let mut music = course(3, 1, 90.0);
    music.name = Some("Music".to_string());
    music.location = "Hendon".to_string();
    music.description = "Learn the piano".to_string();

    CatalogStore::with_courses(vec![music, art, chess])
}

fn ids(courses: Vec<&Course>) -> Vec<u32> {
    courses.iter().map(|course| course.id.0).collect()
}

/// Expect catalog order with an empty query
#[test]
fn default_query_keeps_catalog_order() {
    let catalog = catalog();

    let result = catalog.query(&CatalogQuery::default());

    assert_eq!(ids(result), vec![3, 1, 2]);
}

/// Expect search to match name, location, and description case-insensitively
#[test]
fn searches_across_fields() {
    let catalog = catalog();

    let by_name = catalog.query(&CatalogQuery {
        search: "chess".to_string(),
        ..Default::default()
    });
    let by_location = catalog.query(&CatalogQuery {
        search: "GOLDERS".to_string(),
        ..Default::default()
    });
    let by_description = catalog.query(&CatalogQuery {
        search: " piano ".to_string(),
        ..Default::default()
    });

    assert_eq!(ids(by_name), vec![2]);
    assert_eq!(ids(by_location), vec![1]);
    assert_eq!(ids(by_description), vec![3]);
}

/// Expect sorting by price in both directions
#[test]
fn sorts_by_price() {
    let catalog = catalog();

    let ascending = catalog.query(&CatalogQuery {
        sort_key: SortKey::Price,
        ..Default::default()
    });
    let descending = catalog.query(&CatalogQuery {
        sort_key: SortKey::Price,
        order: SortOrder::Descending,
        ..Default::default()
    });

    assert_eq!(ids(ascending), vec![2, 1, 3]);
    assert_eq!(ids(descending), vec![3, 1, 2]);
}

/// Expect sorting by name and by stock
#[test]
fn sorts_by_name_and_stock() {
    let catalog = catalog();

    let by_name = catalog.query(&CatalogQuery {
        sort_key: SortKey::Name,
        ..Default::default()
    });
    let by_stock = catalog.query(&CatalogQuery {
        sort_key: SortKey::Stock,
        ..Default::default()
    });

    assert_eq!(ids(by_name), vec![1, 2, 3]);
    assert_eq!(ids(by_stock), vec![3, 1, 2]);
}

/// Expect sorting by location
#[test]
fn sorts_by_location() {
    let catalog = catalog();

    let result = catalog.query(&CatalogQuery {
        sort_key: SortKey::Location,
        ..Default::default()
    });

    assert_eq!(ids(result), vec![1, 3, 2]);
}

/// Expect descending name sort to reverse the ascending order
#[test]
fn sorts_by_name_descending() {
    let catalog = catalog();

    let result = catalog.query(&CatalogQuery {
        sort_key: SortKey::Name,
        order: SortOrder::Descending,
        ..Default::default()
    });

    assert_eq!(ids(result), vec![3, 2, 1]);
}

/// Expect search and sort to combine
#[test]
fn filters_then_sorts() {
    let catalog = catalog();

    let result = catalog.query(&CatalogQuery {
        search: "h".to_string(),
        sort_key: SortKey::Price,
        order: SortOrder::Descending,
    });

    // Art in Golders Green is the only course without a match
    assert_eq!(ids(result), vec![3, 2]);
}
