use std::sync::Arc;

use contracts::domain::a006_driver::{fields, DRIVER_STATUSES, VEHICLE_TYPES};
use leptos::prelude::*;

use super::view_model::{parts, DriverDetailsViewModel};
use crate::shared::crud::{EntityEditPage, FormView};
use crate::shared::form::{static_options, CheckboxField, FileField, SelectField, TextField};

pub fn driver_form(warehouses: Signal<Vec<(String, String)>>) -> FormView {
    Arc::new(move |form| {
        view! {
            <section class="form-section">
                <h3 class="form-section__title">"Driver"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::NAME label="Name" required=true />
                    <TextField form=form field=fields::PHONE label="Phone" input_type="tel" required=true />
                    <TextField form=form field=fields::EMAIL label="Email" input_type="email" />
                    <SelectField
                        form=form
                        field=fields::STATUS
                        label="Status"
                        options=static_options(DRIVER_STATUSES)
                    />
                    <SelectField
                        form=form
                        field=fields::WAREHOUSE
                        label="Warehouse"
                        options=warehouses
                        placeholder="Not assigned"
                    />
                    <CheckboxField form=form field=fields::IS_AVAILABLE label="Available for delivery" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Vehicle"</h3>
                <div class="form-grid">
                    <SelectField
                        form=form
                        field=fields::VEHICLE_TYPE
                        label="Type"
                        options=static_options(VEHICLE_TYPES)
                        placeholder="Select type"
                    />
                    <TextField form=form field=fields::VEHICLE_NUMBER label="Number" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Current address"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::CURRENT_STREET label="Street" />
                    <TextField form=form field=fields::CURRENT_CITY label="City" />
                    <TextField form=form field=fields::CURRENT_STATE label="State" />
                    <TextField form=form field=fields::CURRENT_PIN_CODE label="Pincode" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Permanent address"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::PERMANENT_STREET label="Street" />
                    <TextField form=form field=fields::PERMANENT_CITY label="City" />
                    <TextField form=form field=fields::PERMANENT_STATE label="State" />
                    <TextField form=form field=fields::PERMANENT_PIN_CODE label="Pincode" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Aadhar card"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::AADHAR_NUMBER label="Number" placeholder="12 digits" />
                    <FileField form=form part=parts::AADHAR_FRONT label="Front" current=fields::AADHAR_FRONT />
                    <FileField form=form part=parts::AADHAR_BACK label="Back" current=fields::AADHAR_BACK />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Driving license"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::LICENSE_NUMBER label="Number" />
                    <TextField form=form field=fields::LICENSE_EXPIRY label="Expiry" input_type="date" />
                    <FileField form=form part=parts::LICENSE_FRONT label="Front" current=fields::LICENSE_FRONT />
                    <FileField form=form part=parts::LICENSE_BACK label="Back" current=fields::LICENSE_BACK />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"PAN card"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::PAN_NUMBER label="Number" placeholder="ABCDE1234F" />
                    <FileField form=form part=parts::PAN_IMAGE label="Image" current=fields::PAN_IMAGE />
                </div>
            </section>
        }
        .into_any()
    })
}

/// `/drivers/new` and `/drivers/:id`.
#[component]
pub fn DriverDetails() -> impl IntoView {
    let vm = DriverDetailsViewModel::new();
    view! {
        <EntityEditPage
            controller=vm.controller
            list_route=DriverDetailsViewModel::LIST_ROUTE
            form=driver_form(vm.warehouses)
        />
    }
}
