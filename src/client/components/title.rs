use dioxus::prelude::*;

use crate::{client::router::Route, config::Config};

/// Store name and tagline linking back to the lesson listing
#[component]
pub fn StorefrontTitleButton() -> Element {
    let config = use_context::<Config>();

    rsx!(
        Link {
            to: Route::Home {},
            class: "flex items-baseline gap-2",
            span { class: "text-xl font-semibold", "{config.store_name}" }
            if !config.tagline.is_empty() {
                span { class: "text-xs opacity-70", "{config.tagline}" }
            }
        }
    )
}
