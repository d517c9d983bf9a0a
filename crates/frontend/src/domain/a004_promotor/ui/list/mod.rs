use std::sync::Arc;

use contracts::domain::a004_promotor::{Promotor, PromotorStatusUpdate};
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_promotor::ui::details::PromotorDetailsViewModel;
use crate::shared::crud::{
    active_badge, use_page_controller, Column, EntityListPage, FilterSpec, RowActions,
};
use crate::shared::form::static_options;
use crate::shared::format::format_optional;

#[component]
pub fn PromotorList() -> impl IntoView {
    let controller = use_page_controller::<Promotor>();
    let state = *controller.state();

    let columns = vec![
        Column::text("Name", |p: &Promotor| p.name.clone()),
        Column::text("Referral code", |p: &Promotor| p.referral_code.clone()),
        Column::text("Phone", |p: &Promotor| p.phone.clone()),
        Column::text("Email", |p: &Promotor| p.email.clone()),
        Column::text("Commission %", |p: &Promotor| format_optional(p.commission_rate)),
        Column::text("City", |p: &Promotor| p.address.city.clone()),
        Column::new("Status", |p: &Promotor| active_badge(p.is_active)),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS))];

    let actions = controller.clone();
    let toggle: RowActions<Promotor> = Arc::new(move |p: &Promotor| {
        let ctrl = actions.clone();
        let id = p.id.clone();
        let busy_id = id.clone();
        let body = PromotorStatusUpdate {
            is_active: !p.is_active,
        };
        let label = if p.is_active { "Deactivate" } else { "Activate" };
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
            edit_route=PromotorDetailsViewModel::LIST_ROUTE
            row_actions=toggle
            search_placeholder="Search by name, phone, email or code..."
        />
    }
}
