use std::sync::Arc;

use contracts::domain::a010_role::{fields, Role, PERMISSION_KEYS};
use contracts::shared::field_path::Field;
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{FormHandle, TextAreaField, TextField};

/// One checkbox per catalog permission.
#[component]
pub fn PermissionChecklist(form: FormHandle, field: Field<Vec<String>>) -> impl IntoView {
    view! {
        <fieldset class="form-group permission-list">
            <legend>{move || format!("Permissions ({})", form.get(field).len())}</legend>
            {PERMISSION_KEYS
                .iter()
                .map(|(key, label)| {
                    let key = *key;
                    view! {
                        <label class="permission-list__item">
                            <input
                                type="checkbox"
                                prop:checked=move || form.get(field).iter().any(|p| p == key)
                                disabled=move || form.busy().get()
                                on:change=move |ev| {
                                    let next = Role::toggled(
                                        &form.get_untracked(field),
                                        key,
                                        event_target_checked(&ev),
                                    );
                                    form.set(field, next);
                                }
                            />
                            <span>{*label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

pub fn role_form() -> FormView {
    Arc::new(|form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::NAME label="Name" required=true />
                <TextAreaField form=form field=fields::DESCRIPTION label="Description" />
            </div>
            <PermissionChecklist form=form field=fields::PERMISSIONS />
        }
        .into_any()
    })
}
