use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{CartTable, Page},
    router::Route,
};
use crate::config::Config;
use crate::store::Storefront;

#[component]
pub fn ShoppingCart() -> Element {
    let config = use_context::<Config>();
    let mut storefront = use_context::<Store<Storefront>>();
    let is_empty = storefront.read().cart.is_empty();

    rsx!(
        Title { {config.page_title("Cart")} }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-196",
                div { class: "card-body",
                    h2 { class: "card-title", "Shopping Cart" }
                    if is_empty {
                        div { class: "flex flex-col items-center gap-2 p-4",
                            p { "Your cart is empty" }
                            Link { to: Route::Home {}, class: "btn btn-primary",
                                "Browse lessons"
                            }
                        }
                    } else {
                        CartTable {}
                        div { class: "card-actions justify-between",
                            Link { to: Route::Home {}, class: "btn btn-outline",
                                "Continue shopping"
                            }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| {
                                    storefront.write().cart.clear();
                                    tracing::info!("Cleared cart");
                                },
                                "Empty cart"
                            }
                        }
                    }
                }
            }
        }
    )
}
