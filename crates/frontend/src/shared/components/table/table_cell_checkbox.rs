//! Чекбокс выбора строки в ячейке таблицы
//!
//! ```ignore
//! <TableCellCheckbox
//!     checked=Signal::derive(move || selected.with(|s| s.contains(&id)))
//!     on_change=Callback::new(move |checked| toggle(id.clone(), checked))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Клик по чекбоксу не доходит до строки (stop_propagation)
#[component]
pub fn TableCellCheckbox(
    /// Состояние чекбокса
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback при изменении
    on_change: Callback<bool>,

    /// Подпись для screen reader
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}
