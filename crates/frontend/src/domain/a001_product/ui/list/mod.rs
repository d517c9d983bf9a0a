use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::Category;
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;

use crate::domain::a001_product::ui::details::product_form;
use crate::shared::crud::{
    active_badge, option_label, thumbnail, use_options, use_page_controller, Column,
    EntityListPage, FilterSpec,
};
use crate::shared::form::static_options;
use crate::shared::format::{format_money, format_optional};

#[component]
pub fn ProductList() -> impl IntoView {
    let controller = use_page_controller::<Product>();
    let categories = use_options::<Category>();

    let columns = vec![
        Column::new("Image", |p: &Product| {
            thumbnail(p.images.first().map(String::as_str).unwrap_or_default())
        }),
        Column::text("Name", |p: &Product| p.name.clone()),
        Column::text("Category", move |p: &Product| {
            categories.with(|options| option_label(options, &p.category))
        }),
        Column::text("Price", |p: &Product| p.price.map(format_money).unwrap_or_else(|| "-".into())),
        Column::text("MRP", |p: &Product| p.mrp.map(format_money).unwrap_or_else(|| "-".into())),
        Column::text("Stock", |p: &Product| format_optional(p.stock)),
        Column::text("Variants", |p: &Product| p.variants.len().to_string()),
        Column::new("Status", |p: &Product| active_badge(p.is_active)),
    ];
    let filters = vec![
        FilterSpec::new("category", "Category", categories),
        FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS)),
    ];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            form=product_form(categories)
            search_placeholder="Search by name or description..."
        />
    }
}
