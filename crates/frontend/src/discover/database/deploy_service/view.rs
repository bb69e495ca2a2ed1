use contracts::integrations::DatabaseDeployMeta;
use leptos::prelude::*;

use super::select_security_groups::SelectSecurityGroups;
use crate::discover::context::use_discover;
use crate::shared::client_log::emit_error_event;

/// Deployment of the database access agent into the VPC of the enrolled RDS database
#[component]
pub fn DeployService(db_meta: DatabaseDeployMeta) -> impl IntoView {
    let ctx = use_discover();
    let selected = ctx.selected_security_groups;

    let emit = Callback::new(|message: String| emit_error_event("discover", message));

    let db = &db_meta.selected_db;
    let target = if db.engine.is_empty() {
        db.name.clone()
    } else {
        format!("{} ({})", db.name, db.engine)
    };
    let location = format!("{} · {}", db.vpc_id, db.region);

    let summary = move || {
        selected.with(|s| {
            if s.is_empty() {
                "No security groups selected, the VPC default will be used".to_string()
            } else {
                format!("Selected ({}): {}", s.len(), s.ids().join(", "))
            }
        })
    };

    view! {
        <div class="deploy-service">
            <div class="deploy-service__target">
                <strong>{target}</strong>
                <span class="deploy-service__location">{location}</span>
            </div>

            <SelectSecurityGroups
                selected_security_groups=selected
                db_meta=db_meta
                emit_error_event=emit
            />

            <div class="deploy-service__summary">{summary}</div>
        </div>
    }
}
