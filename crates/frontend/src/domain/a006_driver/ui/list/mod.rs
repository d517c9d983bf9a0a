use std::sync::Arc;

use contracts::domain::a005_warehouse::Warehouse;
use contracts::domain::a006_driver::{Driver, DriverStatusUpdate, DRIVER_STATUSES, VEHICLE_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_driver::ui::details::DriverDetailsViewModel;
use crate::shared::crud::{
    option_label, use_options, use_page_controller, Column, EntityListPage, FilterSpec,
    RowActions,
};
use crate::shared::form::static_options;
use crate::shared::format::format_date;

fn label_of(table: &[(&str, &str)], value: &str) -> String {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[component]
pub fn DriverList() -> impl IntoView {
    let controller = use_page_controller::<Driver>();
    let state = *controller.state();
    let warehouses = use_options::<Warehouse>();

    let columns = vec![
        Column::text("Name", |d: &Driver| d.name.clone()),
        Column::text("Phone", |d: &Driver| d.phone.clone()),
        Column::text("Vehicle", |d: &Driver| {
            format!("{} {}", label_of(VEHICLE_TYPES, &d.vehicle.vehicle_type), d.vehicle.number)
                .trim()
                .to_string()
        }),
        Column::text("Warehouse", move |d: &Driver| {
            warehouses.with(|options| option_label(options, &d.warehouse))
        }),
        Column::text("License expiry", |d: &Driver| {
            format_date(Some(d.documents.driving_license.expiry_date.as_str()))
        }),
        Column::text("Available", |d: &Driver| {
            if d.is_available { "Yes" } else { "No" }.to_string()
        }),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(DRIVER_STATUSES))];

    let actions = controller.clone();
    let change_status: RowActions<Driver> = Arc::new(move |d: &Driver| {
        let ctrl = actions.clone();
        let id = d.id.clone();
        let busy_id = id.clone();
        view! {
            <select
                class="table__select"
                prop:value=d.status.clone()
                disabled=move || state.with(|s| s.is_busy(&busy_id))
                on:change=move |ev| {
                    let body = DriverStatusUpdate {
                        status: event_target_value(&ev),
                    };
                    let ctrl = ctrl.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        ctrl.change_status(&id, &body).await;
                    });
                }
            >
                {DRIVER_STATUSES
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
            edit_route=DriverDetailsViewModel::LIST_ROUTE
            row_actions=change_status
            search_placeholder="Search by name, phone or vehicle number..."
        />
    }
}
