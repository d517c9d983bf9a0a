mod view;
mod view_model;

pub use view::PromotorDetails;
pub use view_model::PromotorDetailsViewModel;
