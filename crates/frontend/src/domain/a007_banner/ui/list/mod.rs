use std::sync::Arc;

use contracts::domain::a007_banner::{Banner, BannerStatusUpdate, BANNER_POSITIONS};
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_banner::ui::details::banner_form;
use crate::shared::crud::{
    active_badge, option_label, thumbnail, use_page_controller, Column, EntityListPage,
    FilterSpec, RowActions,
};
use crate::shared::form::static_options;
use crate::shared::format::format_optional;

#[component]
pub fn BannerList() -> impl IntoView {
    let controller = use_page_controller::<Banner>();
    let state = *controller.state();
    let positions = static_options(BANNER_POSITIONS);

    let columns = vec![
        Column::new("Image", |b: &Banner| thumbnail(&b.image)),
        Column::text("Title", |b: &Banner| b.title.clone()),
        Column::text("Position", move |b: &Banner| {
            positions.with(|options| option_label(options, &b.position))
        }),
        Column::text("Order", |b: &Banner| format_optional(b.sort_order)),
        Column::new("Status", |b: &Banner| active_badge(b.is_active)),
    ];
    let filters = vec![
        FilterSpec::new("position", "Position", positions),
        FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS)),
    ];

    let actions = controller.clone();
    let toggle: RowActions<Banner> = Arc::new(move |b: &Banner| {
        let ctrl = actions.clone();
        let id = b.id.clone();
        let busy_id = id.clone();
        let body = BannerStatusUpdate {
            is_active: !b.is_active,
        };
        let label = if b.is_active { "Deactivate" } else { "Activate" };
        view! {
            <button
                class="button button--small button--secondary"
                disabled=move || state.with(|s| s.is_busy(&busy_id))
                on:click=move |_| {
                    let ctrl = ctrl.clone();
                    let id = id.clone();
                    let body = body.clone();
                    spawn_local(async move {
                        ctrl.change_status(&id, &body).await;
                    });
                }
            >
                {label}
            </button>
        }
        .into_any()
    });

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            form=banner_form()
            row_actions=toggle
            search_placeholder="Search by title..."
        />
    }
}
