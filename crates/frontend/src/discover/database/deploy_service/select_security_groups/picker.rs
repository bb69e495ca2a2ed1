use leptos::prelude::*;
use thaw::*;

use super::selection::SecurityGroupSelection;
use super::state::FetchStatus;
use super::view_model::SelectSecurityGroupsVm;
use crate::shared::components::table::TableCellCheckbox;

/// Table of loaded security groups with a checkbox per row and "Load more"
#[component]
pub fn SecurityGroupPicker(
    vm: SelectSecurityGroupsVm,
    selected: RwSignal<SecurityGroupSelection>,
    on_select: Callback<(String, bool)>,
) -> impl IntoView {
    let rows = move || vm.items().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="security-group-picker">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false class="fixed-checkbox-column">""</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"ID"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=240.0>"Description"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=rows
                        // the same group may come back on two pages
                        key=|(idx, sg)| format!("{}:{}", idx, sg.id)
                        children=move |(_, sg)| {
                            let id_for_checked = sg.id.clone();
                            let id_for_change = sg.id.clone();
                            view! {
                                <TableRow>
                                    <TableCellCheckbox
                                        label=sg.name.clone()
                                        checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_checked)))
                                        on_change=Callback::new(move |checked: bool| on_select.run((id_for_change.clone(), checked)))
                                    />
                                    <TableCell>
                                        <TableCellLayout truncate=true>{sg.name.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{sg.id.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{sg.description.clone()}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || vm.page.with(|p| p.items.is_empty())>
                <div class="picker-empty">"No security groups found in this VPC"</div>
            </Show>

            <Flex gap=FlexGap::Small align=FlexAlign::Center style="margin-top: var(--spacing-sm);">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !vm.can_load_more())
                    on_click=move |_| vm.fetch_page()
                >
                    "Load more"
                </Button>
                <Show when=move || vm.fetch_status() == FetchStatus::Loading>
                    <Spinner />
                </Show>
            </Flex>
        </div>
    }
}
