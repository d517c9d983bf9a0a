use crate::shared::crud::{Notice, NoticeKind};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Success notices go away on their own after this many milliseconds.
const SUCCESS_TIMEOUT_MS: u32 = 4000;

#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<Notice>>, on_dismiss: Callback<()>) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(shown) = notice.get().filter(|n| n.kind == NoticeKind::Success) {
            spawn_local(async move {
                TimeoutFuture::new(SUCCESS_TIMEOUT_MS).await;
                // A newer notice stays.
                if notice.try_get_untracked().flatten().as_ref() == Some(&shown) {
                    on_dismiss.run(());
                }
            });
        }
    });

    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "alert alert--success",
                NoticeKind::Error => "alert alert--error",
            };
            view! {
                <div class=class role="status">
                    <span class="alert__text">{n.text}</span>
                    <button class="button button--icon alert__close" on:click=move |_| on_dismiss.run(())>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
