use contracts::domain::a005_warehouse::Warehouse;
use contracts::domain::a006_driver::Driver;
use leptos::prelude::*;

use crate::shared::crud::{use_options, use_page_controller, PageController};

/// Multipart parts of the document scans.
pub mod parts {
    pub const AADHAR_FRONT: &str = "aadharFront";
    pub const AADHAR_BACK: &str = "aadharBack";
    pub const LICENSE_FRONT: &str = "licenseFront";
    pub const LICENSE_BACK: &str = "licenseBack";
    pub const PAN_IMAGE: &str = "panImage";

    pub const ALL: [&str; 5] = [AADHAR_FRONT, AADHAR_BACK, LICENSE_FRONT, LICENSE_BACK, PAN_IMAGE];
}

/// Controller and option sources behind the driver edit page.
pub struct DriverDetailsViewModel {
    pub controller: PageController<Driver>,
    pub warehouses: Signal<Vec<(String, String)>>,
}

impl DriverDetailsViewModel {
    pub const LIST_ROUTE: &'static str = "/drivers";

    pub fn new() -> Self {
        Self {
            controller: use_page_controller::<Driver>(),
            warehouses: use_options::<Warehouse>(),
        }
    }
}
