//! Editors for array-valued leaves: pincode lists, product images and
//! product variants. Each one reads the whole list, applies one pure list
//! operation and writes the result back.

use contracts::domain::a001_product::variants::{self, OptionField, VariantGroupDraft};
use contracts::shared::field_path::Field;
use contracts::shared::list_editors::{add_pincode, push, remove_at, remove_pincode};
use leptos::prelude::*;

use super::fields::FileField;
use super::handle::FormHandle;
use crate::shared::icons::icon;

#[component]
pub fn PincodeEditor(
    form: FormHandle,
    field: Field<Vec<String>>,
    label: &'static str,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let add = move || {
        let current = form.get_untracked(field);
        match add_pincode(&current, &draft.get_untracked()) {
            Ok(next) => {
                form.set(field, next);
                draft.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="form-group list-editor">
            <label>{label}</label>
            <div class="list-editor__input">
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="6"
                    placeholder="6 digit pincode"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="button button--secondary" on:click=move |_| add()>
                    {icon("plus")}
                    " Add"
                </button>
            </div>
            {move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
            <div class="chip-list">
                {move || {
                    form.get(field)
                        .into_iter()
                        .map(|pincode| {
                            let value = pincode.clone();
                            view! {
                                <span class="chip">
                                    {pincode}
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        on:click=move |_| {
                                            let next = remove_pincode(&form.get_untracked(field), &value);
                                            form.set(field, next);
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Image URLs already stored plus files waiting to be uploaded, bounded
/// by `max` together.
#[component]
pub fn ImageListEditor(
    form: FormHandle,
    field: Field<Vec<String>>,
    /// Multipart part name for new files.
    part: &'static str,
    max: usize,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let used = move || form.get(field).len() + form.upload_count(part);

    let add_url = move |_: leptos::ev::MouseEvent| {
        let url = draft.get_untracked().trim().to_string();
        if url.is_empty() || used() >= max {
            return;
        }
        form.set(field, push(&form.get_untracked(field), url));
        draft.set(String::new());
    };

    view! {
        <div class="form-group list-editor">
            <label>{move || format!("Images ({} / {max})", used())}</label>
            <div class="image-list">
                {move || {
                    form.get(field)
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| view! {
                            <div class="image-list__item">
                                <img src=url alt="" />
                                <button
                                    type="button"
                                    class="chip__remove"
                                    on:click=move |_| form.set(field, remove_at(&form.get_untracked(field), index))
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
            <div class="list-editor__input">
                <input
                    type="url"
                    placeholder="https://..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || used() >= max
                    on:click=add_url
                >
                    "Add URL"
                </button>
            </div>
            <Show when=move || { used() < max }>
                <FileField
                    form=form
                    part=part
                    label="Upload images"
                    multiple=true
                    limit=Signal::derive(move || max.saturating_sub(used()))
                />
            </Show>
        </div>
    }
}

#[component]
pub fn VariantEditor(form: FormHandle, field: Field<Vec<VariantGroupDraft>>) -> impl IntoView {
    let apply = move |f: &dyn Fn(&[VariantGroupDraft]) -> Vec<VariantGroupDraft>| {
        form.set(field, f(&form.get_untracked(field)));
    };

    // Rows are rebuilt only when groups or options are added or removed,
    // so typing keeps focus in the input.
    let shape = Memo::new(move |_| {
        form.get(field)
            .iter()
            .map(|group| group.options.len())
            .collect::<Vec<usize>>()
    });

    let group_name = move |g: usize| {
        form.get(field)
            .get(g)
            .map(|group| group.name.clone())
            .unwrap_or_default()
    };

    let option_text = move |g: usize, o: usize, which: OptionField| {
        form.get(field)
            .get(g)
            .and_then(|group| group.options.get(o))
            .map(|option| match which {
                OptionField::Value => option.value.clone(),
                OptionField::Price => option.price.clone(),
                OptionField::Quantity => option.quantity.clone(),
                OptionField::Sku => option.sku.clone(),
            })
            .unwrap_or_default()
    };

    let option_input = move |g: usize, o: usize, which: OptionField| {
        let placeholder = match which {
            OptionField::Value => "Value",
            OptionField::Price => "Price",
            OptionField::Quantity => "Qty",
            OptionField::Sku => "SKU",
        };
        view! {
            <input
                type="text"
                class=format!("variant-option__{}", placeholder.to_lowercase())
                placeholder=placeholder
                prop:value=move || option_text(g, o, which)
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    apply(&|groups| variants::update_option(groups, g, o, which, &text));
                }
            />
        }
    };

    view! {
        <div class="form-group variant-editor">
            <div class="variant-editor__header">
                <label>"Variants"</label>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| apply(&|groups| variants::add_group(groups))
                >
                    {icon("plus")}
                    " Add variant"
                </button>
            </div>
            {move || {
                shape
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(g, option_count)| view! {
                        <div class="variant-group">
                            <div class="variant-group__header">
                                <input
                                    type="text"
                                    placeholder="Variant name (e.g. Size)"
                                    prop:value=move || group_name(g)
                                    on:input=move |ev| {
                                        let name = event_target_value(&ev);
                                        apply(&|groups| variants::rename_group(groups, g, &name));
                                    }
                                />
                                <button
                                    type="button"
                                    class="button button--icon"
                                    title="Remove variant"
                                    on:click=move |_| apply(&|groups| variants::remove_group(groups, g))
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                            {(0..option_count)
                                .map(|o| view! {
                                    <div class="variant-option">
                                        {option_input(g, o, OptionField::Value)}
                                        {option_input(g, o, OptionField::Price)}
                                        {option_input(g, o, OptionField::Quantity)}
                                        {option_input(g, o, OptionField::Sku)}
                                        <button
                                            type="button"
                                            class="button button--icon"
                                            title="Remove option"
                                            on:click=move |_| apply(&|groups| variants::remove_option(groups, g, o))
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                })
                                .collect_view()}
                            <button
                                type="button"
                                class="button button--link"
                                on:click=move |_| apply(&|groups| variants::add_option(groups, g))
                            >
                                "+ Add option"
                            </button>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
