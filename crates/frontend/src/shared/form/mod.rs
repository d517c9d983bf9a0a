//! Nested form state: the store, the handle given to components, field
//! inputs and list sub-editors.

pub mod editors;
pub mod fields;
pub mod handle;
pub mod store;

pub use editors::{ImageListEditor, PincodeEditor, VariantEditor};
pub use fields::{static_options, CheckboxField, FileField, SelectField, TextAreaField, TextField};
pub use handle::FormHandle;
pub use store::{FieldInput, FormEdit, FormStore, FormValue};
