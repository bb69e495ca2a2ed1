use leptos::prelude::*;

/// Header of a discover step: optional step label, title and help text
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// e.g. "Step 3 (Optional)"
    #[prop(optional, into)]
    step: Option<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    {step.map(|s| view! { <div class="page-header__step">{s}</div> })}
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
