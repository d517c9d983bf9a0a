use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("{} talking to {}", config.app_title, config.api_base);
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
