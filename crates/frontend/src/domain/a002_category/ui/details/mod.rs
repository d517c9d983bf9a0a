use std::sync::Arc;

use contracts::domain::a002_category::fields;
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{CheckboxField, FileField, TextAreaField, TextField};

pub fn category_form() -> FormView {
    Arc::new(|form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::NAME label="Name" required=true />
                <TextAreaField form=form field=fields::DESCRIPTION label="Description" />
                <FileField form=form part="image" label="Image" current=fields::IMAGE />
                <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
            </div>
        }
        .into_any()
    })
}
