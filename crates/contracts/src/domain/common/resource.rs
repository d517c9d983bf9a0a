use crate::shared::validation::Problems;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Whether a form is being written as a new record or over an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    Create,
    Edit,
}

/// REST routes of one backend collection.
///
/// `{id}` in a template is replaced with the record id. Routes that a
/// resource does not support are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub item: Option<&'static str>,
    pub create: Option<&'static str>,
    pub update: Option<&'static str>,
    pub delete: Option<&'static str>,
    pub status: Option<&'static str>,
}

impl Endpoints {
    pub const fn read_only(list: &'static str) -> Self {
        Self {
            list,
            item: None,
            create: None,
            update: None,
            delete: None,
            status: None,
        }
    }
}

/// Backend-owned record type shown by a list page.
///
/// Mirrors the aggregate descriptor of the contracts crate: instance data
/// (`id`, search/filter values) plus static metadata about the collection
/// (names, routes, envelope keys).
pub trait Resource:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> &str;

    /// Human readable label, used in confirmation prompts.
    fn display_name(&self) -> &str;

    /// Text fields matched by the list search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against a discrete filter selection (`key` is the
    /// filter's key, e.g. `"category"` or `"status"`).
    fn filter_value(&self, _key: &str) -> Option<String> {
        None
    }

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// Index of the resource in the admin (e.g. "a001").
    fn resource_index() -> &'static str;

    /// Plural collection key, also the envelope key in `{products: [...]}`.
    fn collection_name() -> &'static str;

    /// Singular key used by single-record envelopes (`{product: {...}}`).
    fn element_key() -> &'static str;

    /// UI name, singular.
    fn element_name() -> &'static str;

    /// UI name, plural.
    fn list_name() -> &'static str;

    fn endpoints() -> Endpoints;

    /// Filter keys applied by the backend through query parameters instead
    /// of on the client.
    fn server_filters() -> &'static [&'static str] {
        &[]
    }

    // ============================================================================
    // Forms
    // ============================================================================

    /// Cleanup applied to a parsed form before validation.
    fn normalize(&mut self) {}

    fn validate(&self, _mode: WriteMode) -> Problems {
        Problems::new()
    }

    /// Checks that also count files picked for upload but not sent yet.
    /// `pending` returns the number of staged files for a multipart part.
    fn validate_uploads(&self, _pending: &dyn Fn(&str) -> usize) -> Problems {
        Problems::new()
    }

    fn to_form(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// Defaults for the create form.
    fn empty_form() -> Value {
        Self::default().to_form()
    }

    /// Parses, normalizes and validates a form tree.
    fn from_form(form: &Value, mode: WriteMode) -> Result<Self, Vec<String>> {
        let mut record: Self = serde_json::from_value(form.clone())
            .map_err(|e| vec![format!("Invalid {}: {e}", Self::element_name().to_lowercase())])?;
        record.normalize();
        record.validate(mode).into_result()?;
        Ok(record)
    }
}

/// Filter value for an `isActive` flag.
pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

/// Options for an active/inactive filter select.
pub const ACTIVE_OPTIONS: &[(&str, &str)] = &[("active", "Active"), ("inactive", "Inactive")];
