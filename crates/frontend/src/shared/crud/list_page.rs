//! Generic list page: search, filters, table, pagination, row actions,
//! delete confirmation and an optional modal editor.

use std::sync::Arc;

use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use super::controller::{form_handle, CrudController};
use super::editor::EditorStatus;
use super::state::CrudState;
use crate::config::use_config;
use crate::shared::api::{browser_client, GlooTransport};
use crate::shared::components::{ConfirmDialog, FormErrors, NoticeBar, PaginationControls};
use crate::shared::form::FormHandle;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Controller of a page running in the browser.
pub type PageController<R> = CrudController<R, GlooTransport, RwSignal<CrudState<R>>>;

/// Controller with fresh state, talking to the configured backend.
pub fn use_page_controller<R: Resource>() -> PageController<R> {
    let config = use_config();
    CrudController::new(browser_client(&config), RwSignal::new(CrudState::default()))
}

/// Renders the body of a create/edit form.
pub type FormView = Arc<dyn Fn(FormHandle) -> AnyView + Send + Sync>;

/// Extra per-row buttons (status toggles and the like).
pub type RowActions<R> = Arc<dyn Fn(&R) -> AnyView + Send + Sync>;

/// One table column.
pub struct Column<R> {
    pub title: &'static str,
    render: Arc<dyn Fn(&R) -> AnyView + Send + Sync>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            render: self.render.clone(),
        }
    }
}

impl<R> Column<R> {
    pub fn new(title: &'static str, render: impl Fn(&R) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            title,
            render: Arc::new(render),
        }
    }

    pub fn text(title: &'static str, value: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self::new(title, move |record| value(record).into_any())
    }

    pub fn render(&self, record: &R) -> AnyView {
        (self.render)(record)
    }
}

/// A select filter over [`Resource::filter_value`].
#[derive(Clone)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Signal<Vec<(String, String)>>,
}

impl FilterSpec {
    pub fn new(key: &'static str, label: &'static str, options: Signal<Vec<(String, String)>>) -> Self {
        Self { key, label, options }
    }
}

/// Green/grey pill for active flags.
pub fn active_badge(is_active: bool) -> AnyView {
    let (class, text) = if is_active {
        ("badge badge--success", "Active")
    } else {
        ("badge badge--neutral", "Inactive")
    };
    view! { <span class=class>{text}</span> }.into_any()
}

/// Small image cell; a dash when there is no image.
pub fn thumbnail(url: &str) -> AnyView {
    if url.is_empty() {
        return "-".into_any();
    }
    view! { <img class="table__thumbnail" src=url.to_string() alt="" loading="lazy" /> }.into_any()
}

#[component]
pub fn EntityListPage<R: Resource>(
    controller: PageController<R>,
    columns: Vec<Column<R>>,
    #[prop(optional)] filters: Vec<FilterSpec>,
    /// Modal editor body. Without it (and without `edit_route`) rows are read-only.
    #[prop(optional)]
    form: Option<FormView>,
    /// Create and edit on a separate page under this route instead of a modal.
    #[prop(optional)]
    edit_route: Option<&'static str>,
    #[prop(optional)] row_actions: Option<RowActions<R>>,
    #[prop(optional)] search_placeholder: Option<&'static str>,
    /// Rendered next to the title.
    #[prop(optional, into)]
    header_extra: Option<ViewFn>,
) -> impl IntoView {
    let state = *controller.state();
    let endpoints = R::endpoints();
    let editable = form.is_some() || edit_route.is_some();
    let can_create = editable && endpoints.create.is_some();
    let can_edit = editable && endpoints.update.is_some();
    let can_delete = endpoints.delete.is_some();

    let ctrl = controller.clone();
    spawn_local(async move { ctrl.load().await });

    // ========================================================================
    // Actions
    // ========================================================================

    let reload = {
        let ctrl = controller.clone();
        move || {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.load().await });
        }
    };

    let open_create = {
        let ctrl = controller.clone();
        move || ctrl.open_create()
    };

    let open_edit = {
        let ctrl = controller.clone();
        move |record: R| ctrl.open_edit(record)
    };

    let search = RwSignal::new(String::new());
    {
        let ctrl = controller.clone();
        Effect::new(move |_| {
            let text = search.get();
            ctrl.set_search(&text);
        });
    }

    let select = {
        let ctrl = controller.clone();
        move |key: &'static str, value: String| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.set_selection(key, &value).await });
        }
    };

    let clear_filters = {
        let ctrl = controller.clone();
        move || {
            search.set(String::new());
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.clear_filters().await });
        }
    };

    let on_page_change = {
        let ctrl = controller.clone();
        Callback::new(move |page: usize| ctrl.set_page(page))
    };

    let dismiss_notice = {
        let ctrl = controller.clone();
        Callback::new(move |_| ctrl.dismiss_notice())
    };

    let confirm_delete = {
        let ctrl = controller.clone();
        Callback::new(move |_| {
            let ctrl = ctrl.clone();
            spawn_local(async move {
                ctrl.confirm_delete().await;
            });
        })
    };

    let cancel_delete = {
        let ctrl = controller.clone();
        Callback::new(move |_| ctrl.cancel_delete())
    };

    let save = {
        let ctrl = controller.clone();
        move || {
            let ctrl = ctrl.clone();
            spawn_local(async move {
                ctrl.save().await;
            });
        }
    };

    let close_editor = {
        let ctrl = controller.clone();
        Callback::new(move |_| ctrl.cancel())
    };

    let request_delete = {
        let ctrl = controller.clone();
        move |record: &R| ctrl.request_delete(record)
    };

    // ========================================================================
    // Derived view state
    // ========================================================================

    let rows = Memo::new(move |_| {
        state.with(|s| s.list.visible().into_iter().cloned().collect::<Vec<R>>())
    });
    let loading = Memo::new(move |_| state.with(|s| s.list.loading()));
    let loaded_once = Memo::new(move |_| state.with(|s| s.list.loaded_once()));
    let delete_target = Memo::new(move |_| state.with(|s| s.confirm.subject().cloned()));
    let fetching = Memo::new(move |_| state.with(|s| s.editor.status() == EditorStatus::Fetching));
    let total_count = Signal::derive(move || state.with(|s| s.list.filtered().len()));
    let has_filters = Signal::derive(move || {
        state.with(|s| {
            let filter = s.list.filter();
            !filter.search.trim().is_empty() || !filter.selections.is_empty()
        })
    });
    let columns = Arc::new(columns);
    let column_count = columns.len() + 1;
    let handle = form_handle(state);
    let header_cells = columns.iter().map(|c| {
        let title = c.title;
        view! { <TableHeaderCell>{title}</TableHeaderCell> }
    }).collect_view();

    view! {
        <PageFrame
            page_id=format!("{}_{}--list", R::resource_index(), R::collection_name())
            category=PAGE_CAT_LIST
        >
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::list_name()}</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.list.records().len())}
                    </span>
                    {header_extra.map(|extra| extra.run())}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    {can_create.then(|| match edit_route {
                        Some(route) => view! {
                            <A href=format!("{route}/new") attr:class="button button--primary">
                                {icon("plus")}
                                {format!(" Add {}", R::element_name())}
                            </A>
                        }
                        .into_any(),
                        None => view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                                {icon("plus")}
                                {format!(" Add {}", R::element_name())}
                            </Button>
                        }
                        .into_any(),
                    })}
                </div>
            </div>

            <div class="page__content">
                <NoticeBar
                    notice=Signal::derive(move || state.with(|s| s.notice.clone()))
                    on_dismiss=dismiss_notice
                />

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <div class="filter-panel__search">
                            {icon("search")}
                            <Input
                                value=search
                                placeholder=search_placeholder
                                    .map(str::to_string)
                                    .unwrap_or_else(|| format!("Search {}...", R::list_name().to_lowercase()))
                            />
                        </div>
                        {filters.into_iter().map(|filter| {
                            let select = select.clone();
                            let key = filter.key;
                            let options = filter.options;
                            view! {
                                <label class="filter-panel__field">
                                    <span class="filter-panel__label">{filter.label}</span>
                                    <select
                                        prop:value=move || state.with(|s| s.list.selection(key).to_string())
                                        on:change=move |ev| select(key, event_target_value(&ev))
                                    >
                                        <option value="">"All"</option>
                                        {move || options.get().into_iter().map(|(value, label)| view! {
                                            <option value=value>{label}</option>
                                        }).collect_view()}
                                    </select>
                                </label>
                            }
                        }).collect_view()}
                        <Show when=move || has_filters.get()>
                            <Button appearance=ButtonAppearance::Subtle on_click={
                                let clear_filters = clear_filters.clone();
                                move |_| clear_filters()
                            }>
                                {icon("x")}
                                " Clear"
                            </Button>
                        </Show>
                    </div>
                </div>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                let text = if loading.get() && !loaded_once.get() {
                                    format!("Loading {}...", R::list_name().to_lowercase())
                                } else {
                                    format!("No {} found", R::list_name().to_lowercase())
                                };
                                return view! {
                                    <TableRow>
                                        <td class="table__empty" colspan=column_count.to_string()>{text}</td>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter().map(|record| {
                                let cells = columns.iter().map(|c| {
                                    let cell = c.render(&record);
                                    view! {
                                        <TableCell>
                                            <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                        </TableCell>
                                    }
                                }).collect_view();
                                let extra = row_actions.as_ref().map(|actions| actions(&record));
                                let for_edit = record.clone();
                                let for_delete = record.clone();
                                let open_edit = open_edit.clone();
                                let request_delete = request_delete.clone();
                                view! {
                                    <TableRow>
                                        {cells}
                                        <TableCell>
                                            <div class="table__actions">
                                                {extra}
                                                {can_edit.then(|| match edit_route {
                                                    Some(route) => view! {
                                                        <A
                                                            href=format!("{route}/{}", for_edit.id())
                                                            attr:class="button button--icon"
                                                            attr:title="Edit"
                                                        >
                                                            {icon("edit")}
                                                        </A>
                                                    }
                                                    .into_any(),
                                                    None => view! {
                                                        <button
                                                            class="button button--icon"
                                                            title="Edit"
                                                            on:click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                    }
                                                    .into_any(),
                                                })}
                                                {can_delete.then(|| view! {
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| request_delete(&for_delete)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                })}
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.list.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.list.total_pages()))
                    window=Signal::derive(move || state.with(|s| s.list.page_window()))
                    total_count=total_count
                    on_page_change=on_page_change
                />
            </div>

            {move || delete_target.get().map(|target| view! {
                <ConfirmDialog
                    title=format!("Delete {}", R::element_name().to_lowercase())
                    message=format!("Delete \"{}\"? This cannot be undone.", target.label)
                    busy=Signal::derive(move || state.with(|s| s.confirm.is_running()))
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            })}

            {form.map(|form| {
                let save = save.clone();
                view! {
                    <Show when=move || state.with(|s| s.editor.is_active())>
                        <EditorModal
                            state=state
                            handle=handle
                            fetching=fetching
                            form=form.clone()
                            on_save={
                                let save = save.clone();
                                Callback::new(move |_| save())
                            }
                            on_close=close_editor
                        />
                    </Show>
                }
            })}
        </PageFrame>
    }
}

/// Modal around a form body with its errors and Save/Cancel buttons.
#[component]
fn EditorModal<R: Resource>(
    state: RwSignal<CrudState<R>>,
    handle: FormHandle,
    fetching: Memo<bool>,
    form: FormView,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let busy = handle.busy();
    view! {
        <Modal
            title=Signal::derive(move || state.with(|s| s.editor.title()))
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=busy>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(()) disabled=busy>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            }
        >
            <FormErrors
                problems=Signal::derive(move || state.with(|s| s.editor.problems().to_vec()))
                error=Signal::derive(move || state.with(|s| s.editor.error().map(str::to_string)))
            />
            {move || {
                if fetching.get() {
                    view! { <p class="modal-body__loading">"Loading..."</p> }.into_any()
                } else {
                    form(handle)
                }
            }}
        </Modal>
    }
}
