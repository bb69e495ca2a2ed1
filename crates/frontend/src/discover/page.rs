use contracts::enums::ClusterResource;
use leptos::prelude::*;

use super::context::use_discover;
use super::database::deploy_service::DeployService;
use super::select_resource::SelectResource;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let ctx = use_discover();

    let is_database =
        Memo::new(move |_| ctx.selected_resource.get() == Some(ClusterResource::Databases));

    let deploy_step = move || {
        let is_database = is_database.get();
        match ctx.deploy_meta.get() {
            Some(meta) if is_database => view! { <DeployService db_meta=meta /> }.into_any(),
            _ if is_database => view! {
                <div class="discover-step__hint">
                    "Enroll an RDS database first to deploy the database access agent."
                </div>
            }
            .into_any(),
            _ => ().into_any(),
        }
    };

    view! {
        <div class="discover-page">
            <SelectResource />
            {deploy_step}
        </div>
    }
}
