use std::sync::Arc;

use contracts::domain::a003_order::{
    is_terminal_status, status_label, Order, OrderStatusUpdate, ORDER_STATUSES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud::{use_page_controller, Column, EntityListPage, FilterSpec, RowActions};
use crate::shared::form::static_options;
use crate::shared::format::{format_date, format_money};

fn status_badge(status: &str) -> AnyView {
    let modifier = match status {
        "delivered" => "success",
        "cancelled" => "danger",
        "pending" => "warning",
        _ => "primary",
    };
    view! { <span class=format!("badge badge--{modifier}")>{status_label(status).to_string()}</span> }
        .into_any()
}

/// Orders come from the storefront; the admin only moves them through
/// statuses. The status filter is applied by the backend.
#[component]
pub fn OrderList() -> impl IntoView {
    let controller = use_page_controller::<Order>();
    let state = *controller.state();

    let columns = vec![
        Column::text("Order", |o: &Order| o.order_id.clone()),
        Column::text("Customer", |o: &Order| o.customer.name.clone()),
        Column::text("Phone", |o: &Order| o.customer.phone.clone()),
        Column::text("Items", |o: &Order| o.items.len().to_string()),
        Column::text("Total", |o: &Order| format_money(o.total_amount)),
        Column::text("Payment", |o: &Order| {
            format!("{} / {}", o.payment_method, o.payment_status)
        }),
        Column::new("Status", |o: &Order| status_badge(&o.status)),
        Column::text("Placed", |o: &Order| format_date(o.created_at.as_deref())),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(ORDER_STATUSES))];

    let actions = controller.clone();
    let change_status: RowActions<Order> = Arc::new(move |order: &Order| {
        let id = order.id.clone();
        let current = order.status.clone();
        let locked = is_terminal_status(&current);
        let busy_id = id.clone();
        let ctrl = actions.clone();
        // Shown value; a rejected change puts the saved status back.
        let selected = RwSignal::new(current.clone());
        view! {
            <select
                class="table__select"
                prop:value=move || selected.get()
                disabled=move || locked || state.with(|s| s.is_busy(&busy_id))
                on:change=move |ev| {
                    let body = OrderStatusUpdate {
                        status: event_target_value(&ev),
                        note: None,
                    };
                    selected.set(body.status.clone());
                    let ctrl = ctrl.clone();
                    let id = id.clone();
                    let saved = current.clone();
                    spawn_local(async move {
                        if !ctrl.change_status(&id, &body).await {
                            selected.try_set(saved);
                        }
                    });
                }
            >
                {ORDER_STATUSES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    });

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            row_actions=change_status
            search_placeholder="Search by order, customer or phone..."
        />
    }
}
