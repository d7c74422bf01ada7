use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCartShopping;
use dioxus_free_icons::Icon;

use crate::client::components::{CartSheet, StorefrontTitleButton};
pub use crate::client::router::Route;
use crate::store::Storefront;

#[component]
pub fn Navbar() -> Element {
    let mut storefront = use_context::<Store<Storefront>>();
    let units = storefront.read().cart.total_units();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                StorefrontTitleButton {}
            }
            div {
                class: "navbar-end flex gap-2",
                Link {
                    to: Route::ShoppingCart {},
                    class: "btn btn-ghost flex gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaCartShopping
                    }
                    span { class: "badge badge-primary",
                        "{units}"
                    }
                }
                button {
                    class: "btn btn-outline",
                    disabled: units == 0,
                    onclick: move |_| storefront.write().toggle_sheet(),
                    "Summary"
                }
            }
        }

        CartSheet {}

        Outlet::<Route> {}
    }
}
