use contracts::enums::ClusterResource;
use leptos::prelude::*;

use super::marketing_terms::marketing_term_matches;
use super::ranking::rank_resources;
use crate::discover::context::use_discover;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

/// First discover step: pick what kind of resource to connect
#[component]
pub fn SelectResource() -> impl IntoView {
    let ctx = use_discover();

    let resources = Signal::derive(move || {
        ctx.marketing_params
            .with(|params| rank_resources(ClusterResource::all(), params))
    });
    let suggested = Signal::derive(move || ctx.marketing_params.with(marketing_term_matches));

    view! {
        <div class="discover-step">
            <PageHeader
                title="Select Resource Type".to_string()
                subtitle="Resources matching how you found us are listed first.".to_string()
            />
            <div class="resource-cards">
                <For
                    each=move || resources.get()
                    key=|resource| *resource
                    children=move |resource| {
                        let is_suggested = move || suggested.with(|s| s.contains(&resource));
                        let is_selected = move || ctx.selected_resource.get() == Some(resource);
                        view! {
                            <button
                                class="resource-card"
                                class:resource-card--selected=is_selected
                                on:click=move |_| ctx.selected_resource.set(Some(resource))
                            >
                                {icon(resource.code())}
                                <span class="resource-card__title">{resource.display_name()}</span>
                                <Show when=is_suggested>
                                    <span class="badge badge--success">"Suggested"</span>
                                </Show>
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
