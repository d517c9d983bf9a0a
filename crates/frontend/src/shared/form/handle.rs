use contracts::shared::field_path::Field;
use leptos::prelude::*;

use super::store::{FormEdit, FormStore, FormValue};
use crate::shared::api::UploadSet;

/// What form components get: reactive reads of the store and a single
/// write channel for edits.
#[derive(Clone, Copy)]
pub struct FormHandle {
    form: Signal<FormStore>,
    uploads: Signal<UploadSet>,
    busy: Signal<bool>,
    write: Callback<FormEdit>,
}

impl FormHandle {
    pub fn new(
        form: Signal<FormStore>,
        uploads: Signal<UploadSet>,
        busy: Signal<bool>,
        write: Callback<FormEdit>,
    ) -> Self {
        Self {
            form,
            uploads,
            busy,
            write,
        }
    }

    /// Tracked read of one field.
    pub fn get<V: FormValue>(&self, field: Field<V>) -> V {
        self.form.with(|f| f.get(field))
    }

    pub fn get_untracked<V: FormValue>(&self, field: Field<V>) -> V {
        self.form.with_untracked(|f| f.get(field))
    }

    pub fn edit(&self, edit: FormEdit) {
        self.write.run(edit);
    }

    pub fn set<V: FormValue>(&self, field: Field<V>, value: V) {
        self.edit(FormEdit::set(field, value));
    }

    pub fn upload_names(&self, part: &str) -> Vec<String> {
        self.uploads.with(|u| u.file_names(part))
    }

    pub fn upload_count(&self, part: &str) -> usize {
        self.uploads.with(|u| u.count(part))
    }

    /// True while the form is being submitted.
    pub fn busy(&self) -> Signal<bool> {
        self.busy
    }
}
