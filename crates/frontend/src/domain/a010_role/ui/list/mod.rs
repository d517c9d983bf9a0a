use contracts::domain::a010_role::{Role, PERMISSION_KEYS};
use leptos::prelude::*;

use crate::domain::a010_role::ui::details::role_form;
use crate::shared::crud::{use_page_controller, Column, EntityListPage};

fn permission_summary(role: &Role) -> String {
    if role.permissions.is_empty() {
        return "None".to_string();
    }
    if role.permissions.len() == PERMISSION_KEYS.len() {
        return "All".to_string();
    }
    PERMISSION_KEYS
        .iter()
        .filter(|(key, _)| role.has(key))
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn RoleList() -> impl IntoView {
    let controller = use_page_controller::<Role>();
    let columns = vec![
        Column::text("Name", |r: &Role| r.name.clone()),
        Column::text("Description", |r: &Role| r.description.clone()),
        Column::text("Permissions", permission_summary),
    ];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            form=role_form()
            search_placeholder="Search by name..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_labels_in_catalog_order() {
        let role = Role {
            permissions: vec!["orders".into(), "products".into()],
            ..Default::default()
        };
        assert_eq!(permission_summary(&role), "Products, Orders");
        assert_eq!(permission_summary(&Role::default()), "None");
    }
}
