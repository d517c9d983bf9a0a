use std::sync::Arc;

use contracts::domain::a004_promotor::fields;
use leptos::prelude::*;

use super::view_model::PromotorDetailsViewModel;
use crate::shared::crud::{EntityEditPage, FormView};
use crate::shared::form::{CheckboxField, TextField};

pub fn promotor_form() -> FormView {
    Arc::new(|form| {
        view! {
            <section class="form-section">
                <h3 class="form-section__title">"Profile"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::NAME label="Name" required=true />
                    <TextField form=form field=fields::PHONE label="Phone" input_type="tel" required=true />
                    <TextField form=form field=fields::EMAIL label="Email" input_type="email" />
                    <TextField form=form field=fields::REFERRAL_CODE label="Referral code" />
                    <TextField
                        form=form
                        field=fields::COMMISSION_RATE
                        label="Commission (%)"
                        input_type="number"
                    />
                    <CheckboxField form=form field=fields::IS_ACTIVE label="Active" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Bank details"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::BANK_HOLDER label="Account holder" />
                    <TextField form=form field=fields::BANK_ACCOUNT label="Account number" />
                    <TextField form=form field=fields::BANK_IFSC label="IFSC" placeholder="SBIN0001234" />
                    <TextField form=form field=fields::BANK_NAME label="Bank" />
                </div>
            </section>
            <section class="form-section">
                <h3 class="form-section__title">"Address"</h3>
                <div class="form-grid">
                    <TextField form=form field=fields::STREET label="Street" />
                    <TextField form=form field=fields::CITY label="City" />
                    <TextField form=form field=fields::STATE label="State" />
                    <TextField form=form field=fields::PIN_CODE label="Pincode" />
                </div>
            </section>
        }
        .into_any()
    })
}

/// `/promotors/new` and `/promotors/:id`.
#[component]
pub fn PromotorDetails() -> impl IntoView {
    let vm = PromotorDetailsViewModel::new();
    view! {
        <EntityEditPage
            controller=vm.controller
            list_route=PromotorDetailsViewModel::LIST_ROUTE
            form=promotor_form()
        />
    }
}
