//! Sidebar navigation, grouped and collapsible.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (route, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            items: vec![
                ("/products", "Products", "products"),
                ("/categories", "Categories", "categories"),
                ("/banners", "Banners", "banners"),
                ("/discounts", "Discounts", "discounts"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            items: vec![
                ("/orders", "Orders", "orders"),
                ("/warehouses", "Warehouses", "warehouses"),
                ("/drivers", "Drivers", "drivers"),
            ],
        },
        MenuGroup {
            id: "promotion",
            label: "Promotors",
            items: vec![
                ("/promotors", "Promotors", "promotors"),
                ("/payouts", "Payouts", "payouts"),
            ],
        },
        MenuGroup {
            id: "access",
            label: "Access",
            items: vec![
                ("/admins", "Admins", "admins"),
                ("/roles", "Roles", "roles"),
            ],
        },
    ]
}

/// `route` itself or any page below it.
fn is_active(pathname: &str, route: &str) -> bool {
    pathname == route
        || pathname
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let id = group.id;
                let expanded = move || !collapsed.get().contains(&id);
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| collapsed.update(|ids| {
                                if let Some(pos) = ids.iter().position(|g| *g == id) {
                                    ids.remove(pos);
                                } else {
                                    ids.push(id);
                                }
                            })
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(route, label, icon_name)| view! {
                                    <A
                                        href=route
                                        attr:class=move || {
                                            if location.pathname.with(|p| is_active(p, route)) {
                                                "app-sidebar__item app-sidebar__item--active"
                                            } else {
                                                "app-sidebar__item"
                                            }
                                        }
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
