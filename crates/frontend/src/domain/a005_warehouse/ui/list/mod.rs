use contracts::domain::a005_warehouse::Warehouse;
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;

use crate::domain::a005_warehouse::ui::details::WarehouseDetailsViewModel;
use crate::shared::crud::{active_badge, use_page_controller, Column, EntityListPage, FilterSpec};
use crate::shared::form::static_options;
use crate::shared::format::format_optional;

#[component]
pub fn WarehouseList() -> impl IntoView {
    let controller = use_page_controller::<Warehouse>();
    let columns = vec![
        Column::text("Name", |w: &Warehouse| w.name.clone()),
        Column::text("Code", |w: &Warehouse| w.code.clone()),
        Column::text("City", |w: &Warehouse| w.address.city.clone()),
        Column::text("Manager", |w: &Warehouse| w.manager.name.clone()),
        Column::text("Pincodes", |w: &Warehouse| w.delivery_pincodes.len().to_string()),
        Column::text("Capacity", |w: &Warehouse| format_optional(w.capacity)),
        Column::new("Status", |w: &Warehouse| active_badge(w.is_active)),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS))];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            edit_route=WarehouseDetailsViewModel::LIST_ROUTE
            search_placeholder="Search by name or code..."
        />
    }
}
