use std::sync::Arc;

use contracts::domain::a005_warehouse::fields;
use leptos::prelude::*;

use super::view_model::WarehouseDetailsViewModel;
use crate::shared::crud::{EntityEditPage, FormView};
use crate::shared::form::{CheckboxField, PincodeEditor, TextField};

pub fn warehouse_form() -> FormView {
    Arc::new(|form| {
        view! {
            <section class="form-section">
                <h3 class="form-section__title">"Warehouse"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::NAME label="Name" required=true />
                    <TextField form=form field=fields::CODE label="Code" required=true />
                    <TextField form=form field=fields::CAPACITY label="Capacity" input_type="number" />
                    <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Manager"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::MANAGER_NAME label="Name" />
                    <TextField form=form field=fields::MANAGER_PHONE label="Phone" input_type="tel" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Address"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::STREET label="Street" />
                    <TextField form=form field=fields::CITY label="City" required=true />
                    <TextField form=form field=fields::STATE label="State" />
                    <TextField form=form field=fields::PIN_CODE label="Pincode" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Delivery area"</h3>
                <PincodeEditor form=form field=fields::DELIVERY_PINCODES label="Delivery pincodes" />
            </section>
        }
        .into_any()
    })
}

/// `/warehouses/new` and `/warehouses/:id`.
#[component]
pub fn WarehouseDetails() -> impl IntoView {
    let vm = WarehouseDetailsViewModel::new();
    view! {
        <EntityEditPage
            controller=vm.controller
            list_route=WarehouseDetailsViewModel::LIST_ROUTE
            form=warehouse_form()
        />
    }
}
