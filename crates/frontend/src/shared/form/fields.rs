//! Input components bound to a [`FormHandle`] through typed field paths.

use contracts::shared::field_path::Field;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use super::handle::FormHandle;
use super::store::FormEdit;
use crate::shared::api::UploadFile;

/// Select options from a static `(value, label)` table.
pub fn static_options(table: &[(&str, &str)]) -> Signal<Vec<(String, String)>> {
    Signal::stored(
        table
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect(),
    )
}

#[component]
pub fn TextField(
    form: FormHandle,
    field: Field<String>,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field.path().dotted();
    view! {
        <div class="form-group">
            <label for=id.clone()>
                {label}
                {required.then_some(view! { <span class="form-group__required">"*"</span> })}
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || form.get(field)
                disabled=move || form.busy().get()
                on:input=move |ev| form.edit(FormEdit::text(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: FormHandle,
    field: Field<String>,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let id = field.path().dotted();
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <textarea
                id=id
                rows="3"
                placeholder=placeholder
                prop:value=move || form.get(field)
                disabled=move || form.busy().get()
                on:input=move |ev| form.edit(FormEdit::text(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(form: FormHandle, field: Field<bool>, label: &'static str) -> impl IntoView {
    view! {
        <label class="form-group form-group--checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.get(field)
                disabled=move || form.busy().get()
                on:change=move |ev| form.edit(FormEdit::checked(field, event_target_checked(&ev)))
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
pub fn SelectField(
    form: FormHandle,
    field: Field<String>,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Label of the empty choice; no empty choice when not set.
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    let id = field.path().dotted();
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <select
                id=id
                prop:value=move || form.get(field)
                disabled=move || form.busy().get()
                on:change=move |ev| form.edit(FormEdit::text(field, event_target_value(&ev)))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = form.get(field);
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Reads a picked file into memory.
pub async fn read_upload(file: web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let array = js_sys::Uint8Array::new(&buffer);
    let mut bytes = vec![0; array.length() as usize];
    array.copy_to(&mut bytes);
    Ok(UploadFile {
        file_name: file.name(),
        mime: file.type_(),
        bytes,
    })
}

/// File input attached to a multipart part. Existing URL (if any) is
/// shown next to it.
#[component]
pub fn FileField(
    form: FormHandle,
    /// Multipart part name.
    part: &'static str,
    label: &'static str,
    #[prop(optional)] current: Option<Field<String>>,
    #[prop(optional)] accept: Option<&'static str>,
    #[prop(optional)] multiple: bool,
    /// Files still allowed; extra picks are dropped.
    #[prop(optional, into)]
    limit: Option<Signal<usize>>,
) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        let mut picked: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        input.set_value("");
        error.set(None);
        if let Some(room) = limit.map(|l| l.get_untracked()) {
            if picked.len() > room {
                error.set(Some(format!("Only {room} more file(s) allowed")));
                picked.truncate(room);
            }
        }
        for file in picked {
            leptos::task::spawn_local(async move {
                match read_upload(file).await {
                    Ok(file) => {
                        form.edit(FormEdit::Upload {
                            part: part.to_string(),
                            file,
                            single: !multiple,
                        });
                    }
                    Err(e) => {
                        log::error!("{e}");
                        error.set(Some(e));
                    }
                }
            });
        }
    };

    view! {
        <div class="form-group form-group--file">
            <label>{label}</label>
            {current.map(|field| view! {
                {move || {
                    let url = form.get(field);
                    (!url.is_empty()).then(|| view! {
                        <a class="form-group__current" href=url.clone() target="_blank">
                            <img src=url.clone() alt=label />
                        </a>
                    })
                }}
            })}
            <input
                type="file"
                accept=accept.unwrap_or("image/*")
                multiple=multiple
                disabled=move || form.busy().get()
                on:change=on_change
            />
            <ul class="form-group__files">
                {move || form.upload_names(part).into_iter().map(|name| view! {
                    <li>
                        {name}
                    </li>
                }).collect_view()}
            </ul>
            {move || (form.upload_count(part) > 0).then(|| view! {
                <button
                    type="button"
                    class="button button--link"
                    on:click=move |_| form.edit(FormEdit::ClearUpload { part: part.to_string() })
                >
                    "Clear selected files"
                </button>
            })}
            {move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}
