use dioxus::prelude::*;

/// Main content area below the fixed navbar, centred and width-capped
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[80px] px-4 pb-8",
            div {
                class: "mx-auto w-full max-w-[1440px] {class}",
                {children}
            }
        }
    )
}
