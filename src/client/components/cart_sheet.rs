use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::course::format_price, store::Storefront};

/// Slide-out summary of the cart, shown while the sheet is open
#[component]
pub fn CartSheet() -> Element {
    let mut storefront = use_context::<Store<Storefront>>();
    let navigator = use_navigator();

    let state = storefront.read();
    if !state.is_sheet_open() {
        return rsx!();
    }

    let lines: Vec<(String, u32)> = state
        .cart
        .items()
        .iter()
        .filter_map(|item| {
            state
                .catalog
                .get(item.id)
                .map(|course| (course.display_name().to_string(), item.count))
        })
        .collect();
    let total = format_price(state.cart_total());
    drop(state);

    rsx!(
        aside {
            class: "fixed right-0 top-0 z-20 h-full w-80 bg-base-100 shadow-lg p-4 flex flex-col gap-4",
            div { class: "flex justify-between items-center",
                h2 { class: "text-lg font-semibold", "Your cart" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| storefront.write().close_sheet(),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
            }
            if lines.is_empty() {
                p { class: "opacity-70", "Your cart is empty" }
            }
            ul { class: "flex flex-col gap-2 flex-1",
                {lines.iter().map(|(name, count)| rsx! {
                    li { class: "flex justify-between",
                        span { "{name}" }
                        span { "x{count}" }
                    }
                })}
            }
            p { class: "font-semibold", "Total: {total}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    storefront.write().close_sheet();
                    navigator.push(Route::ShoppingCart {});
                },
                "View cart"
            }
        }
    )
}
