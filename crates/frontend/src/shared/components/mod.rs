pub mod confirm_dialog;
pub mod form_errors;
pub mod notice_bar;
pub mod pagination_controls;

pub use confirm_dialog::ConfirmDialog;
pub use form_errors::FormErrors;
pub use notice_bar::NoticeBar;
pub use pagination_controls::PaginationControls;
