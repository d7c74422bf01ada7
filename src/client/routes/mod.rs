pub mod cart;
pub mod home;
pub mod not_found;

pub use cart::ShoppingCart;
pub use home::Home;
pub use not_found::NotFound;
