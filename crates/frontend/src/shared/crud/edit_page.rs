//! Full-page editor for records edited under their own route
//! (`/drivers/new`, `/drivers/:id`).

use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::controller::form_handle;
use super::editor::{EditorStatus, SubmitOutcome};
use super::list_page::{FormView, PageController};
use crate::shared::components::FormErrors;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Route parameter value that opens an empty create form.
pub const NEW_RECORD: &str = "new";

#[component]
pub fn EntityEditPage<R: Resource>(
    controller: PageController<R>,
    /// Where to go after saving or cancelling.
    list_route: &'static str,
    form: FormView,
) -> impl IntoView {
    let state = *controller.state();
    let navigate = use_navigate();
    let id = use_params_map().with_untracked(|params| params.get("id"));

    match id.as_deref() {
        None | Some(NEW_RECORD) => controller.open_create(),
        Some(id) => {
            let ctrl = controller.clone();
            let id = id.to_string();
            spawn_local(async move { ctrl.open_by_id(&id).await });
        }
    }

    let on_save = move |_| {
        let ctrl = controller.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if ctrl.submit().await == SubmitOutcome::Saved {
                navigate(list_route, Default::default());
            }
        });
    };

    let handle = form_handle(state);
    let status = Memo::new(move |_| state.with(|s| s.editor.status()));
    let fetching = Memo::new(move |_| status.get() == EditorStatus::Fetching);
    let editing = Memo::new(move |_| matches!(status.get(), EditorStatus::Open | EditorStatus::Submitting));
    let busy = handle.busy();

    view! {
        <PageFrame
            page_id=format!("{}_{}--detail", R::resource_index(), R::collection_name())
            category=PAGE_CAT_DETAIL
        >
            <div class="page__header">
                <div class="page__header-left">
                    <A href=list_route attr:class="button button--icon" attr:title="Back">
                        {icon("chevron-left")}
                    </A>
                    <h1 class="page__title">{move || state.with(|s| s.editor.title())}</h1>
                </div>
                <div class="page__header-right">
                    <A href=list_route attr:class="button button--secondary">"Cancel"</A>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || busy.get() || status.get() != EditorStatus::Open
                    >
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            <div class="page__content">
                <FormErrors
                    problems=Signal::derive(move || state.with(|s| s.editor.problems().to_vec()))
                    error=Signal::derive(move || state.with(|s| s.editor.error().map(str::to_string)))
                />
                {move || {
                    if editing.get() {
                        form(handle)
                    } else if fetching.get() {
                        view! { <div class="page__loading"><Spinner /></div> }.into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
