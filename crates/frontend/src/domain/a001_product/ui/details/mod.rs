use std::sync::Arc;

use contracts::domain::a001_product::{fields, IMAGES_PART, MAX_PRODUCT_IMAGES};
use leptos::prelude::*;

use crate::shared::crud::FormView;
use crate::shared::form::{
    CheckboxField, ImageListEditor, SelectField, TextAreaField, TextField, VariantEditor,
};

/// Product form; `categories` feeds the category select.
pub fn product_form(categories: Signal<Vec<(String, String)>>) -> FormView {
    Arc::new(move |form| {
        view! {
            <div class="form-grid">
                <TextField form=form field=fields::NAME label="Name" required=true />
                <SelectField
                    form=form
                    field=fields::CATEGORY
                    label="Category"
                    options=categories
                    placeholder="Select category"
                />
                <TextAreaField form=form field=fields::DESCRIPTION label="Description" />
            </div>
            <div class="form-grid form-grid--4">
                <TextField form=form field=fields::PRICE label="Price" input_type="number" required=true />
                <TextField form=form field=fields::MRP label="MRP" input_type="number" />
                <TextField form=form field=fields::STOCK label="Stock" input_type="number" />
                <TextField form=form field=fields::UNIT label="Unit" placeholder="kg, pack, piece" />
            </div>
            <ImageListEditor
                form=form
                field=fields::IMAGES
                part=IMAGES_PART
                max=MAX_PRODUCT_IMAGES
            />
            <VariantEditor form=form field=fields::VARIANTS />
            <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
        }
        .into_any()
    })
}
