use crate::{error::CartError, model::cart::CartItem, store::cart::CartStore};

use super::*;

/// Expect a new entry with count 1 when adding a course not yet in the cart
#[test]
fn appends_new_item_with_count_one() {
    let mut cart = CartStore::new();
    let chess = course(1, 5, 10.0);

    let count = cart.add(&chess).unwrap();

    assert_eq!(count, 1);
    assert_eq!(cart.items(), &[CartItem::new(CourseId(1))]);
}

/// Expect the count to increase rather than a duplicate entry when adding the same course
#[test]
fn increments_existing_item() {
    let mut cart = CartStore::new();
    let chess = course(1, 5, 10.0);

    cart.add(&chess).unwrap();
    let count = cart.add(&chess).unwrap();

    assert_eq!(count, 2);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.count_of(CourseId(1)), 2);
}

/// Expect items to keep the order they were first added in
#[test]
fn preserves_insertion_order() {
    let mut cart = CartStore::new();
    let first = course(2, 5, 10.0);
    let second = course(1, 5, 10.0);

    cart.add(&first).unwrap();
    cart.add(&second).unwrap();
    cart.add(&first).unwrap();

    let ids: Vec<CourseId> = cart.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![CourseId(2), CourseId(1)]);
}

/// Expect Error when the new count would exceed the course stock
#[test]
fn fails_when_stock_exhausted() {
    let mut cart = CartStore::new();
    let chess = course(1, 1, 10.0);

    cart.add(&chess).unwrap();
    let result = cart.add(&chess);

    assert_eq!(
        result,
        Err(CartError::OutOfStock {
            id: CourseId(1),
            stock: 1
        })
    );
    assert_eq!(cart.count_of(CourseId(1)), 1);
}

/// Expect Error and no entry when the course has no stock at all
#[test]
fn fails_for_sold_out_course() {
    let mut cart = CartStore::new();
    let sold_out = course(1, 0, 10.0);

    let result = cart.add(&sold_out);

    assert!(result.is_err());
    assert!(cart.is_empty());
}

/// Expect Error rather than an overflow when the count is already at the largest stock
#[test]
fn fails_at_maximum_count() {
    let mut cart = CartStore::new();
    let unlimited = course(1, u32::MAX, 1.0);
    cart.set_count(&unlimited, u32::MAX).unwrap();

    let result = cart.add(&unlimited);

    assert_eq!(
        result,
        Err(CartError::OutOfStock {
            id: CourseId(1),
            stock: u32::MAX
        })
    );
    assert_eq!(cart.count_of(CourseId(1)), u32::MAX);
}
