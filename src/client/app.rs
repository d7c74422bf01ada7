use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::router::Route,
    config::Config,
    source::{CatalogSource, Source},
    store::Storefront,
};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Configuration error, falling back to defaults: {}", e);
            Config::default()
        }
    });

    use_context_provider(|| config.clone());

    let mut storefront = use_store(Storefront::new);
    use_context_provider(|| storefront);

    // Load the catalog once, the write guard is never held across the fetch
    use_future(move || {
        let source = Source::from_config(&config);
        async move {
            storefront.write().catalog.begin_load();
            let result = source.fetch().await;
            storefront.write().apply_catalog(result);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
