use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - previous/next plus a window of page buttons
///
/// Pages are 1-based. Hidden when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page numbers to render as buttons
    #[prop(into)]
    window: Signal<Vec<usize>>,

    /// Total count of matching items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    window
                        .get()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("Page {} of {} ({} total)", current_page.get(), total_pages.get(), total_count.get())}
                </span>
            </div>
        </Show>
    }
}
