//! Application state.
//!
//! [`CatalogStore`] and [`CartStore`] are plain structs mutated through methods, each with a
//! [`Subscribers`] registry so non-UI code can observe changes. [`Storefront`] owns both and is
//! the value views share through context.

pub mod cart;
pub mod catalog;
pub mod observer;
pub mod storefront;


pub use self::{
    cart::{CartEvent, CartStore},
    catalog::{CatalogEvent, CatalogQuery, CatalogStore, SortKey, SortOrder},
    observer::{Observer, SubscriptionId, Subscribers},
    storefront::Storefront,
};
