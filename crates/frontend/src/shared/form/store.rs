//! Form state as a JSON tree.
//!
//! Every edit replaces one leaf through the path setter; siblings at
//! every level stay as they were, and the previous tree is never mutated.

use contracts::shared::field_path::{get_path, set_path, Field, FieldPath};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::api::UploadFile;

/// How a typed field reads from and writes to the tree.
pub trait FormValue: Sized {
    fn read(value: Option<&Value>) -> Self;
    fn write(self) -> Value;
}

impl FormValue for String {
    fn read(value: Option<&Value>) -> Self {
        scalar_text(value)
    }

    fn write(self) -> Value {
        Value::String(self)
    }
}

impl FormValue for bool {
    fn read(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }

    fn write(self) -> Value {
        Value::Bool(self)
    }
}

impl<T: Serialize + DeserializeOwned> FormValue for Vec<T> {
    fn read(value: Option<&Value>) -> Self {
        value
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    fn write(self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}

/// Text shown in an input for a scalar leaf.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// What an input produced: text-like inputs write strings, checkboxes
/// write booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl From<FieldInput> for Value {
    fn from(input: FieldInput) -> Self {
        match input {
            FieldInput::Text(text) => Value::String(text),
            FieldInput::Checked(checked) => Value::Bool(checked),
        }
    }
}

/// One change requested by a form component.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Input { path: FieldPath, input: FieldInput },
    /// Whole-value replacement, used by the list sub-editors.
    Set { path: FieldPath, value: Value },
    /// Attach a file under a multipart part name; `single` replaces what
    /// was attached before.
    Upload {
        part: String,
        file: UploadFile,
        single: bool,
    },
    ClearUpload { part: String },
}

impl FormEdit {
    pub fn text<V>(field: Field<V>, text: impl Into<String>) -> Self {
        FormEdit::Input {
            path: field.path(),
            input: FieldInput::Text(text.into()),
        }
    }

    pub fn checked(field: Field<bool>, checked: bool) -> Self {
        FormEdit::Input {
            path: field.path(),
            input: FieldInput::Checked(checked),
        }
    }

    pub fn set<V: FormValue>(field: Field<V>, value: V) -> Self {
        FormEdit::Set {
            path: field.path(),
            value: value.write(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormStore {
    tree: Value,
}

impl Default for FormStore {
    fn default() -> Self {
        Self {
            tree: Value::Object(Map::new()),
        }
    }
}

impl FormStore {
    pub fn new(tree: Value) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn get<V: FormValue>(&self, field: Field<V>) -> V {
        V::read(get_path(&self.tree, &field.path()))
    }

    pub fn set<V: FormValue>(&mut self, field: Field<V>, value: V) {
        self.set_value(&field.path(), value.write());
    }

    pub fn text(&self, path: &FieldPath) -> String {
        scalar_text(get_path(&self.tree, path))
    }

    pub fn checked(&self, path: &FieldPath) -> bool {
        bool::read(get_path(&self.tree, path))
    }

    pub fn apply_input(&mut self, path: &FieldPath, input: FieldInput) {
        self.set_value(path, input.into());
    }

    pub fn set_value(&mut self, path: &FieldPath, value: Value) {
        self.tree = set_path(&self.tree, path, value);
    }

    /// Read, change and write back an array leaf.
    pub fn update_list<T, F>(&mut self, field: Field<Vec<T>>, f: F)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&[T]) -> Vec<T>,
    {
        let next = f(&self.get(field));
        self.set(field, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_promotor::{fields, Promotor};
    use contracts::domain::a005_warehouse::fields as warehouse;
    use contracts::domain::common::Resource;
    use contracts::shared::list_editors::add_pincode;
    use serde_json::json;

    #[test]
    fn text_edit_touches_only_its_leaf() {
        let before = FormStore::new(Promotor::empty_form());
        let mut after = before.clone();
        after.apply_input(&fields::BANK_IFSC.path(), FieldInput::Text("HDFC0001234".into()));

        assert_eq!(after.get(fields::BANK_IFSC), "HDFC0001234");
        assert_eq!(before.get(fields::BANK_IFSC), "");
        assert_eq!(after.tree()["bankDetails"]["bankName"], before.tree()["bankDetails"]["bankName"]);
        assert_eq!(after.tree()["address"], before.tree()["address"]);
    }

    #[test]
    fn checkbox_writes_a_boolean() {
        let mut form = FormStore::new(Promotor::empty_form());
        form.apply_input(&fields::IS_ACTIVE.path(), FieldInput::Checked(false));
        assert_eq!(form.tree()["isActive"], json!(false));
        assert!(!form.get(fields::IS_ACTIVE));
    }

    #[test]
    fn numbers_from_the_backend_read_as_text() {
        let form = FormStore::new(json!({ "commissionRate": 7.5 }));
        assert_eq!(form.get(fields::COMMISSION_RATE), "7.5");
    }

    #[test]
    fn missing_intermediates_are_created() {
        let mut form = FormStore::default();
        form.set(fields::BANK_HOLDER, "Meena".to_string());
        assert_eq!(form.tree(), &json!({ "bankDetails": { "accountHolderName": "Meena" } }));
    }

    #[test]
    fn list_leaves_change_through_update_list() {
        let mut form = FormStore::default();
        form.update_list(warehouse::DELIVERY_PINCODES, |list| {
            add_pincode(list, "560034").unwrap_or_else(|_| list.to_vec())
        });
        form.update_list(warehouse::DELIVERY_PINCODES, |list| {
            add_pincode(list, "560034").unwrap_or_else(|_| list.to_vec())
        });
        assert_eq!(form.get(warehouse::DELIVERY_PINCODES), vec!["560034".to_string()]);
    }
}
