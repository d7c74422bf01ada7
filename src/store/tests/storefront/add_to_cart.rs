use crate::{
    error::CartError,
    store::{catalog::CatalogStore, storefront::Storefront},
};

use super::*;

fn storefront() -> Storefront {
    Storefront::with_catalog(CatalogStore::with_courses(vec![
        course(1, 2, 10.0),
        course(2, 5, 25.5),
    ]))
}

/// Expect Error and an unchanged cart for an id missing from the catalog
#[test]
fn rejects_unknown_course() {
    let mut storefront = storefront();

    let result = storefront.add_to_cart(CourseId(42));

    assert_eq!(result, Err(CartError::UnknownCourse(CourseId(42))));
    assert!(storefront.cart.is_empty());
}

/// Expect availability to drop as places are added to the cart
#[test]
fn tracks_availability() {
    let mut storefront = storefront();

    storefront.add_to_cart(CourseId(1)).unwrap();

    assert_eq!(storefront.available(CourseId(1)), 1);
    assert_eq!(storefront.available(CourseId(2)), 5);
    assert_eq!(storefront.available(CourseId(42)), 0);
}

/// Expect the cart total to sum price times count
#[test]
fn totals_cart_price() {
    let mut storefront = storefront();

    storefront.add_to_cart(CourseId(1)).unwrap();
    storefront.add_to_cart(CourseId(1)).unwrap();
    storefront.set_cart_count(CourseId(2), 2).unwrap();

    assert_eq!(storefront.cart.total_units(), 4);
    assert!((storefront.cart_total() - 71.0).abs() < f64::EPSILON);
}

/// Expect the sheet flag to flip on each toggle
#[test]
fn toggles_sheet() {
    let mut storefront = storefront();

    storefront.toggle_sheet();
    assert!(storefront.is_sheet_open());
    storefront.toggle_sheet();
    assert!(!storefront.is_sheet_open());
    storefront.toggle_sheet();
    storefront.close_sheet();
    assert!(!storefront.is_sheet_open());
}
