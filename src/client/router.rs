use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, ShoppingCart},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/cart")]
    ShoppingCart {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
