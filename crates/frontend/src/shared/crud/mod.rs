//! Generic create/read/update/delete pages over any [`Resource`].
//!
//! [`Resource`]: contracts::domain::common::Resource

pub mod confirm;
pub mod controller;
pub mod edit_page;
pub mod editor;
pub mod list_page;
pub mod list_state;
pub mod options;
pub mod state;

pub use confirm::ConfirmDialog;
pub use controller::{form_handle, CrudController};
pub use edit_page::EntityEditPage;
pub use editor::{EditorMode, EditorState, EditorStatus, SubmitOutcome};
pub use list_page::{
    active_badge, thumbnail, use_page_controller, Column, EntityListPage, FilterSpec, FormView,
    PageController, RowActions,
};
pub use list_state::{FilterState, ListState, PAGE_SIZE, PAGE_WINDOW};
pub use options::{option_label, use_options};
pub use state::{CrudState, DeleteTarget, Notice, NoticeKind, StateCell};
