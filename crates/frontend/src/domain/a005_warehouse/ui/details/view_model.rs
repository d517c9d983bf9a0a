use contracts::domain::a005_warehouse::Warehouse;

use crate::shared::crud::{use_page_controller, PageController};

/// Controller behind the warehouse edit page.
pub struct WarehouseDetailsViewModel {
    pub controller: PageController<Warehouse>,
}

impl WarehouseDetailsViewModel {
    pub const LIST_ROUTE: &'static str = "/warehouses";

    pub fn new() -> Self {
        Self {
            controller: use_page_controller::<Warehouse>(),
        }
    }
}
