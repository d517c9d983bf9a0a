pub mod field_path;
pub mod lenient;
pub mod list_editors;
pub mod validation;
