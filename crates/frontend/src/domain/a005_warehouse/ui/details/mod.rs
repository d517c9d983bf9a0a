mod view;
mod view_model;

pub use view::WarehouseDetails;
pub use view_model::WarehouseDetailsViewModel;
