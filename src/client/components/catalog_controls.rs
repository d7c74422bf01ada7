use dioxus::prelude::*;

use crate::store::{CatalogQuery, SortKey, SortOrder};

fn sort_key_from(value: &str) -> SortKey {
    match value {
        "name" => SortKey::Name,
        "location" => SortKey::Location,
        "price" => SortKey::Price,
        "stock" => SortKey::Stock,
        _ => SortKey::None,
    }
}

/// Search box and sort selectors for the lesson listing
#[component]
pub fn CatalogControls(query: Signal<CatalogQuery>) -> Element {
    let mut query = query;
    let descending = query.read().order == SortOrder::Descending;

    rsx!(
        div { class: "flex flex-wrap gap-2 w-full max-w-[1440px]",
            input {
                class: "input input-bordered flex-1 min-w-48",
                r#type: "search",
                placeholder: "Search lessons",
                value: "{query.read().search}",
                oninput: move |evt| query.write().search = evt.value(),
            }
            select {
                class: "select select-bordered",
                onchange: move |evt| query.write().sort_key = sort_key_from(&evt.value()),
                option { value: "", "Sort by" }
                option { value: "name", "Name" }
                option { value: "location", "Location" }
                option { value: "price", "Price" }
                option { value: "stock", "Places left" }
            }
            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    let mut query = query.write();
                    query.order = match query.order {
                        SortOrder::Ascending => SortOrder::Descending,
                        SortOrder::Descending => SortOrder::Ascending,
                    };
                },
                if descending { "Descending" } else { "Ascending" }
            }
        }
    )
}
