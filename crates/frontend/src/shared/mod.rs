pub mod api;
pub mod components;
pub mod crud;
pub mod form;
pub mod format;
pub mod icons;
pub mod modal;
pub mod page_frame;
