use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Yes/no question in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    /// The confirmed action is running.
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(optional)] confirm_label: Option<&'static str>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or("Delete");
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-dialog__message">{move || message.get()}</p>
            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Working..." } else { confirm_label }}
                </Button>
            </div>
        </Modal>
    }
}
