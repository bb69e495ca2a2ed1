//! Step 3 of the database agent deployment: security groups for the service
//!
//! Pages through the security groups of the database VPC and lets the user
//! tick the ones the agent service should run with. The picked ids live in
//! the parent so they survive this view.

pub mod picker;
pub mod selection;
pub mod state;
pub mod view_model;

use contracts::integrations::DatabaseDeployMeta;
use leptos::prelude::*;
use thaw::*;

use self::picker::SecurityGroupPicker;
pub use self::selection::SecurityGroupSelection;
use self::state::AttemptStatus;
use self::view_model::SelectSecurityGroupsVm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

const HELP_TEXT: &str = "Select security groups to assign to the Fargate service that will be \
    running the database access agent. The security groups you pick must allow outbound \
    connectivity to this cluster. If you don't select any security groups, the default one \
    for the VPC will be used.";

#[component]
pub fn SelectSecurityGroups(
    /// Ids picked by the user, owned by the discover flow
    selected_security_groups: RwSignal<SecurityGroupSelection>,
    db_meta: DatabaseDeployMeta,
    /// Sink for error events
    emit_error_event: Callback<String>,
) -> impl IntoView {
    let vm = SelectSecurityGroupsVm::new(db_meta, emit_error_event);

    // first page on mount
    vm.fetch_page();
    on_cleanup(move || vm.dispose());

    let attempt = Memo::new(move |_| vm.attempt());

    let on_select = Callback::new(move |(id, checked): (String, bool)| {
        selected_security_groups.update(|s| s.toggle(&id, checked));
    });

    view! {
        <div class="discover-step">
            <PageHeader
                step="Step 3 (Optional)".to_string()
                title="Select Security Groups".to_string()
                subtitle=HELP_TEXT.to_string()
            />

            {move || match attempt.get() {
                AttemptStatus::Processing => view! {
                    <Flex style="justify-content: center; margin-top: var(--spacing-lg);">
                        <Spinner />
                    </Flex>
                }.into_any(),
                AttemptStatus::Failed(message) => view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center style="margin: var(--spacing-lg) 0; color: var(--color-error);">
                        {icon("warning")}
                        <span>{message}</span>
                    </Flex>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || vm.is_fetching())
                        on_click=move |_| vm.fetch_page()
                    >
                        "Retry"
                    </Button>
                }.into_any(),
                AttemptStatus::Success => view! {
                    <div style="margin-top: var(--spacing-lg);">
                        <SecurityGroupPicker
                            vm=vm
                            selected=selected_security_groups
                            on_select=on_select
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
