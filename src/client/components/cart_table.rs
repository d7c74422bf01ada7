use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMinus, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    model::{cart::CartItem, course::format_price},
    store::Storefront,
};

#[component]
pub fn CartTable() -> Element {
    let storefront = use_context::<Store<Storefront>>();
    let items: Vec<CartItem> = storefront.read().cart.items().to_vec();
    let total = format_price(storefront.read().cart_total());

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Lesson" }
                        th { "Price" }
                        th { "Places" }
                        th { "Subtotal" }
                        th {}
                    }
                }
                tbody {
                    {items.into_iter().map(|item| rsx! {
                        CartRow { key: "{item.id}", item }
                    })}
                }
                tfoot {
                    tr {
                        th { colspan: 3, "Total" }
                        th { "{total}" }
                        th {}
                    }
                }
            }
        }
    )
}

#[component]
fn CartRow(item: CartItem) -> Element {
    let mut storefront = use_context::<Store<Storefront>>();

    let id = item.id;
    let (name, price, subtotal, available) = {
        let state = storefront.read();
        let course = state.catalog.get(id);
        (
            course.map(|c| c.display_name().to_string()).unwrap_or_default(),
            course.map(|c| format_price(c.price)).unwrap_or_default(),
            course
                .map(|c| format_price(c.price * item.count as f64))
                .unwrap_or_default(),
            state.available(id),
        )
    };

    rsx!(
        tr {
            td { "{name}" }
            td { "{price}" }
            td {
                div { class: "flex gap-2 items-center",
                    button {
                        class: "btn btn-xs btn-outline",
                        onclick: move |_| {
                            if let Err(err) = storefront.write().remove_from_cart(id) {
                                tracing::warn!("{}", err);
                            }
                        },
                        Icon { width: 12, height: 12, icon: FaMinus }
                    }
                    span { "{item.count}" }
                    button {
                        class: "btn btn-xs btn-outline",
                        disabled: available == 0,
                        onclick: move |_| {
                            if let Err(err) = storefront.write().add_to_cart(id) {
                                tracing::warn!("{}", err);
                            }
                        },
                        Icon { width: 12, height: 12, icon: FaPlus }
                    }
                }
            }
            td { "{subtotal}" }
            td {
                button {
                    class: "btn btn-xs btn-ghost",
                    onclick: move |_| {
                        storefront.write().cart.remove(id);
                    },
                    Icon { width: 12, height: 12, icon: FaTrash }
                }
            }
        }
    )
}
