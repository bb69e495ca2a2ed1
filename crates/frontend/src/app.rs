use crate::discover::{DiscoverContext, DiscoverPage};
use crate::shared::config::DiscoverConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DiscoverConfig::from_location();
    log::debug!("discover config: {:?}", config);

    // Provide the discover state to every step via context.
    provide_context(DiscoverContext::new(&config));

    view! {
        <DiscoverPage />
    }
}
