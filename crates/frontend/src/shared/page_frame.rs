//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{index}_{collection}--{category}"`, e.g. `"a006_drivers--detail"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the resource searchable: copy the id from the
//! DOM inspector, search for the prefix and you land in `domain/a006_driver/`.

use leptos::prelude::*;

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Pages that belong to no resource (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{index}_{collection}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
