use contracts::domain::a002_category::Category;
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;

use crate::domain::a002_category::ui::details::category_form;
use crate::shared::crud::{
    active_badge, thumbnail, use_page_controller, Column, EntityListPage, FilterSpec,
};
use crate::shared::form::static_options;

#[component]
pub fn CategoryList() -> impl IntoView {
    let controller = use_page_controller::<Category>();
    let columns = vec![
        Column::new("Image", |c: &Category| thumbnail(&c.image)),
        Column::text("Name", |c: &Category| c.name.clone()),
        Column::text("Description", |c: &Category| c.description.clone()),
        Column::new("Status", |c: &Category| active_badge(c.is_active)),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS))];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            form=category_form()
        />
    }
}
