use contracts::domain::a008_discount::Discount;
use contracts::domain::common::ACTIVE_OPTIONS;
use leptos::prelude::*;

use crate::domain::a008_discount::ui::details::discount_form;
use crate::shared::crud::{
    active_badge, use_page_controller, Column, EntityListPage, FilterSpec,
};
use crate::shared::form::static_options;
use crate::shared::format::{format_date, format_money, today};

fn usage(d: &Discount) -> String {
    let used = d.used_count.unwrap_or_default();
    match d.usage_limit {
        Some(limit) => format!("{used} / {limit}"),
        None => format!("{used} / unlimited"),
    }
}

fn validity(d: &Discount) -> AnyView {
    let range = format!(
        "{} - {}",
        format_date(Some(d.valid_from.as_str())),
        format_date(Some(d.valid_to.as_str()))
    );
    let expired = match (today(), d.valid_to_date()) {
        (Some(today), Some(to)) => to < today,
        _ => false,
    };
    view! {
        <span>{range}</span>
        {expired.then(|| view! { <span class="badge badge--danger">"Expired"</span> })}
    }
    .into_any()
}

#[component]
pub fn DiscountList() -> impl IntoView {
    let controller = use_page_controller::<Discount>();
    let columns = vec![
        Column::text("Code", |d: &Discount| d.code.clone()),
        Column::text("Discount", |d: &Discount| {
            let pct = d.percentage.map(|p| format!("{p}%")).unwrap_or_else(|| "-".into());
            match d.max_discount {
                Some(max) => format!("{pct} up to {}", format_money(max)),
                None => pct,
            }
        }),
        Column::text("Min order", |d: &Discount| {
            d.min_order_value.map(format_money).unwrap_or_else(|| "-".into())
        }),
        Column::new("Validity", validity),
        Column::text("Used", usage),
        Column::new("Status", |d: &Discount| active_badge(d.is_active)),
    ];
    let filters = vec![FilterSpec::new("status", "Status", static_options(ACTIVE_OPTIONS))];

    view! {
        <EntityListPage
            controller=controller
            columns=columns
            filters=filters
            form=discount_form()
            search_placeholder="Search by code..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_shows_limit_when_set() {
        let mut d = Discount {
            used_count: Some(3),
            usage_limit: Some(10),
            ..Default::default()
        };
        assert_eq!(usage(&d), "3 / 10");
        d.usage_limit = None;
        d.used_count = None;
        assert_eq!(usage(&d), "0 / unlimited");
    }
}
