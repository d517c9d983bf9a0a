//! Payouts page: one table per payout shape, switched in the header.

use std::sync::Arc;

use contracts::domain::a011_payout::{
    payout_status_label, AggregatedPayout, OrderPayout, PayoutRow, PayoutStatusUpdate, PayoutView,
};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::crud::{use_page_controller, Column, EntityListPage, FilterSpec, RowActions};
use crate::shared::form::static_options;
use crate::shared::format::format_money;

fn status_badge(status: &str) -> AnyView {
    let modifier = match status {
        "paid" => "success",
        "failed" => "danger",
        "processing" => "primary",
        _ => "warning",
    };
    view! {
        <span class=format!("badge badge--{modifier}")>{payout_status_label(status).to_string()}</span>
    }
    .into_any()
}

fn view_toggle(current: RwSignal<PayoutView>) -> impl IntoView {
    view! {
        <div class="segmented">
            {[PayoutView::Aggregated, PayoutView::PerOrder]
                .into_iter()
                .map(|option| view! {
                    <Button
                        appearance=Signal::derive(move || {
                            if current.get() == option {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        })
                        on_click=move |_| current.set(option)
                    >
                        {option.label()}
                    </Button>
                })
                .collect_view()}
        </div>
    }
}

/// Same columns and "mark paid" action for either payout shape.
fn payout_table<P: Resource + PayoutRow>(current: RwSignal<PayoutView>) -> AnyView {
    let controller = use_page_controller::<P>();
    let state = *controller.state();

    let columns = vec![
        Column::text("Promotor", |p: &P| p.promotor_name().to_string()),
        Column::text("Reference", |p: &P| p.reference()),
        Column::text("Amount", |p: &P| format_money(p.amount())),
        Column::new("Status", |p: &P| status_badge(p.status())),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(P::STATUS_OPTIONS))];

    let actions = controller.clone();
    let mark_paid: RowActions<P> = Arc::new(move |p: &P| {
        if !p.can_mark_paid() {
            return ().into_any();
        }
        let ctrl = actions.clone();
        let key = p.row_key().to_string();
        let busy_key = key.clone();
        view! {
            <button
                class="button button--small button--primary"
                disabled=move || state.with(|s| s.is_busy(&busy_key))
                on:click=move |_| {
                    let ctrl = ctrl.clone();
                    let key = key.clone();
                    spawn_local(async move {
                        ctrl.change_status(&key, &PayoutStatusUpdate::paid(None)).await;
                    });
                }
            >
                "Mark paid"
            </button>
        }
        .into_any()
    });

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            row_actions=mark_paid
            search_placeholder="Search by promotor..."
            header_extra=move || view_toggle(current)
        />
    }
    .into_any()
}

#[component]
pub fn PayoutList() -> impl IntoView {
    let current = RwSignal::new(PayoutView::default());
    move || match current.get() {
        PayoutView::Aggregated => payout_table::<AggregatedPayout>(current),
        PayoutView::PerOrder => payout_table::<OrderPayout>(current),
    }
}
