use crate::store::{cart::CartStore, catalog::CatalogStore};

use super::*;

/// Expect items whose course left the catalog to be dropped
#[test]
fn drops_items_missing_from_catalog() {
    let mut cart = CartStore::new();
    cart.add(&course(1, 5, 10.0)).unwrap();
    cart.add(&course(2, 5, 10.0)).unwrap();
    let catalog = CatalogStore::with_courses(vec![course(2, 5, 10.0)]);

    let dropped = cart.retain_known(&catalog);

    assert_eq!(dropped, 1);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, CourseId(2));
}

/// Expect counts above the refreshed stock to be clamped
#[test]
fn clamps_counts_to_stock() {
    let mut cart = CartStore::new();
    let chess = course(1, 5, 10.0);
    cart.set_count(&chess, 4).unwrap();
    let catalog = CatalogStore::with_courses(vec![course(1, 2, 10.0)]);

    let dropped = cart.retain_known(&catalog);

    assert_eq!(dropped, 0);
    assert_eq!(cart.count_of(CourseId(1)), 2);
}

/// Expect items for courses that sold out to be dropped
#[test]
fn drops_sold_out_courses() {
    let mut cart = CartStore::new();
    cart.add(&course(1, 5, 10.0)).unwrap();
    let catalog = CatalogStore::with_courses(vec![course(1, 0, 10.0)]);

    let dropped = cart.retain_known(&catalog);

    assert_eq!(dropped, 1);
    assert!(cart.is_empty());
}
