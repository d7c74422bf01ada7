use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{CatalogControls, CourseCard, Page};
use crate::config::Config;
use crate::model::course::Course;
use crate::store::{CatalogQuery, Storefront};

#[component]
pub fn Home() -> Element {
    let config = use_context::<Config>();
    let storefront = use_context::<Store<Storefront>>();
    let query = use_signal(CatalogQuery::default);

    let state = storefront.read();
    let loading = state.catalog.is_loading() && state.catalog.is_empty();
    let error = state.catalog.error().map(str::to_string);
    let courses: Vec<Course> = state
        .catalog
        .query(&query.read())
        .into_iter()
        .cloned()
        .collect();
    let no_matches = !loading && courses.is_empty();
    drop(state);

    rsx!(
        Title { {config.page_title("Lessons")} }
        Meta {
            name: "description",
            content: "Browse after-school lessons and add places to your cart."
        }
        Page { class: "flex flex-col items-center gap-4",
            CatalogControls { query }
            if let Some(error) = error {
                div { class: "alert alert-error w-full max-w-[1440px]",
                    "Could not load lessons: {error}"
                }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4 w-full max-w-[1440px]",
                if loading {
                    for i in 0..8 {
                        div { key: "{i}", class: "skeleton h-80 w-full" }
                    }
                } else {
                    {courses.into_iter().map(|course| rsx! {
                        CourseCard { key: "{course.id}", course }
                    })}
                }
            }
            if no_matches {
                p { class: "opacity-70", "No lessons match your search" }
            }
        }
    )
}
