//! Driver edit page: `view` renders the form, `view_model` owns the
//! controller, option sources and upload part names.

mod view;
mod view_model;

pub use view::DriverDetails;
pub use view_model::DriverDetailsViewModel;
