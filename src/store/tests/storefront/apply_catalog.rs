use crate::{
    error::FetchError,
    store::{catalog::CatalogStore, storefront::Storefront},
};

use super::*;

/// Expect a refetch that drops a course to remove it from the cart
#[test]
fn prunes_cart_on_success() {
    let mut storefront =
        Storefront::with_catalog(CatalogStore::with_courses(vec![course(1, 5, 10.0)]));
    storefront.add_to_cart(CourseId(1)).unwrap();

    storefront.apply_catalog(Ok(vec![course(2, 5, 10.0)]));

    assert!(storefront.cart.is_empty());
    assert_eq!(storefront.catalog.len(), 1);
}

/// Expect the cart untouched when the fetch fails
#[test]
fn keeps_cart_on_failure() {
    let mut storefront =
        Storefront::with_catalog(CatalogStore::with_courses(vec![course(1, 5, 10.0)]));
    storefront.add_to_cart(CourseId(1)).unwrap();

    storefront.apply_catalog(Err(FetchError::Request("offline".to_string())));

    assert_eq!(storefront.cart.count_of(CourseId(1)), 1);
    assert!(storefront.catalog.error().is_some());
}
