use std::sync::Arc;

use contracts::domain::a008_discount::fields;
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{CheckboxField, TextAreaField, TextField};

pub fn discount_form() -> FormView {
    Arc::new(|form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::CODE label="Code" placeholder="SUMMER25" required=true />
                <TextAreaField form=form field=fields::DESCRIPTION label="Description" />
                <TextField form=form field=fields::PERCENTAGE label="Discount %" input_type="number" required=true />
                <TextField form=form field=fields::MAX_DISCOUNT label="Max discount" input_type="number" />
                <TextField form=form field=fields::MIN_ORDER_VALUE label="Min order value" input_type="number" />
                <TextField form=form field=fields::VALID_FROM label="Valid from" input_type="date" required=true />
                <TextField form=form field=fields::VALID_TO label="Valid to" input_type="date" required=true />
                <TextField form=form field=fields::USAGE_LIMIT label="Usage limit" input_type="number" />
                <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
            </div>
        }
        .into_any()
    })
}
