use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    model::course::{format_price, Course},
    store::Storefront,
};

#[component]
pub fn CourseCard(course: Course) -> Element {
    let mut storefront = use_context::<Store<Storefront>>();

    let id = course.id;
    let available = storefront.read().available(id);
    let name = course.display_name().to_string();
    let price = format_price(course.price);

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-full",
            figure {
                img {
                    class: "h-40 w-full object-cover",
                    src: "{course.image_url}",
                    alt: "{name}",
                }
            }
            div {
                class: "card-body",
                h2 { class: "card-title", "{name}" }
                p { class: "text-sm opacity-70", "{course.location}" }
                if !course.description.is_empty() {
                    p { "{course.description}" }
                }
                div { class: "flex justify-between items-center",
                    p { class: "font-semibold", "{price}" }
                    if available == 0 {
                        span { class: "badge badge-error", "Sold out" }
                    } else {
                        span { class: "badge badge-outline", "{available} left" }
                    }
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary flex gap-2",
                        disabled: available == 0,
                        onclick: move |_| {
                            if let Err(err) = storefront.write().add_to_cart(id) {
                                tracing::warn!("{}", err);
                            }
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPlus
                        }
                        "Add to cart"
                    }
                }
            }
        }
    )
}
