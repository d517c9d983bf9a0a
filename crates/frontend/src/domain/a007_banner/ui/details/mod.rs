use std::sync::Arc;

use contracts::domain::a007_banner::{fields, BANNER_POSITIONS};
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{static_options, CheckboxField, FileField, SelectField, TextField};

pub fn banner_form() -> FormView {
    Arc::new(|form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::TITLE label="Title" required=true />
                <FileField form=form part="image" label="Image" current=fields::IMAGE />
                <TextField form=form field=fields::LINK label="Link" input_type="url" placeholder="https://..." />
                <SelectField
                    form=form
                    field=fields::POSITION
                    label="Position"
                    options=static_options(BANNER_POSITIONS)
                />
                <TextField form=form field=fields::SORT_ORDER label="Sort order" input_type="number" />
                <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
            </div>
        }
        .into_any()
    })
}
