use std::sync::Arc;

use contracts::domain::a009_admin::{fields, MIN_PASSWORD_LEN};
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{CheckboxField, SelectField, TextField};

pub fn admin_form(roles: Signal<Vec<(String, String)>>) -> FormView {
    Arc::new(move |form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::NAME label="Name" required=true />
                <TextField form=form field=fields::EMAIL label="Email" input_type="email" required=true />
                <div>
                    <TextField form=form field=fields::PASSWORD label="Password" input_type="password" />
                    <p class="form-group__hint">
                        {format!("At least {MIN_PASSWORD_LEN} characters. Leave blank to keep the current password.")}
                    </p>
                </div>
                <SelectField
                    form=form
                    field=fields::ROLE
                    label="Role"
                    options=roles
                    placeholder="Select role"
                />
                <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
            </div>
        }
        .into_any()
    })
}
