//! Application top bar: sidebar toggle, title and sign-out.

use crate::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::storage::clear_tokens;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let config = use_config();
    let signed_in = AuthContext::from_storage().is_signed_in();

    let logout = move |_| {
        clear_tokens();
        log::info!("signed out");
        // the login flow lives outside this app; a reload hands over to it
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload after sign-out failed: {e:?}");
            }
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    title=move || if sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if sidebar_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">{config.app_title}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {if signed_in { "Signed in" } else { "Not signed in" }}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
