pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader sidebar_open=sidebar_open />
            <div class="app-body">
                <aside class="app-sidebar" class:app-sidebar--collapsed=move || !sidebar_open.get()>
                    <left::Sidebar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
