use contracts::domain::a009_admin::Admin;
use contracts::domain::a010_role::Role;
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;

use crate::domain::a009_admin::ui::details::admin_form;
use crate::shared::crud::{
    active_badge, option_label, use_options, use_page_controller, Column, EntityListPage,
    FilterSpec,
};
use crate::shared::form::static_options;
use crate::shared::format::format_date;

#[component]
pub fn AdminList() -> impl IntoView {
    let controller = use_page_controller::<Admin>();
    let roles = use_options::<Role>();

    let columns = vec![
        Column::text("Name", |a: &Admin| a.name.clone()),
        Column::text("Email", |a: &Admin| a.email.clone()),
        Column::text("Role", move |a: &Admin| roles.with(|options| option_label(options, &a.role))),
        Column::text("Last login", |a: &Admin| format_date(a.last_login.as_deref())),
        Column::new("Status", |a: &Admin| active_badge(a.is_active)),
    ];
    let filters = vec![
        FilterSpec::new("role", "Role", roles),
        FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS)),
    ];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            form=admin_form(roles)
            search_placeholder="Search by name or email..."
        />
    }
}
