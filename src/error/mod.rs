//! Error types for the storefront.
//!
//! Each concern has its own error enum defined with `thiserror`: fetching the catalog,
//! mutating the cart, and reading configuration. None of them are fatal to the application,
//! a failed fetch leaves the catalog as it was and a rejected cart operation leaves the cart
//! untouched.

pub mod cart;
pub mod config;
pub mod fetch;

pub use self::{cart::CartError, config::ConfigError, fetch::FetchError};
