use contracts::domain::a004_promotor::Promotor;

use crate::shared::crud::{use_page_controller, PageController};

/// Controller behind the promotor edit page.
pub struct PromotorDetailsViewModel {
    pub controller: PageController<Promotor>,
}

impl PromotorDetailsViewModel {
    pub const LIST_ROUTE: &'static str = "/promotors";

    pub fn new() -> Self {
        Self {
            controller: use_page_controller::<Promotor>(),
        }
    }
}
