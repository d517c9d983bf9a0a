use leptos::prelude::*;

/// Validation problems and the last server error of a form.
#[component]
pub fn FormErrors(
    #[prop(into)] problems: Signal<Vec<String>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <Show when=move || !problems.with(Vec::is_empty)>
            <ul class="form-errors">
                {move || problems.get().into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
            </ul>
        </Show>
    }
}
