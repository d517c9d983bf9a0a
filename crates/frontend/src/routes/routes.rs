use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_promotor::ui::details::PromotorDetails;
use crate::domain::a004_promotor::ui::list::PromotorList;
use crate::domain::a005_warehouse::ui::details::WarehouseDetails;
use crate::domain::a005_warehouse::ui::list::WarehouseList;
use crate::domain::a006_driver::ui::details::DriverDetails;
use crate::domain::a006_driver::ui::list::DriverList;
use crate::domain::a007_banner::ui::list::BannerList;
use crate::domain::a008_discount::ui::list::DiscountList;
use crate::domain::a009_admin::ui::list::AdminList;
use crate::domain::a010_role::ui::list::RoleList;
use crate::domain::a011_payout::ui::list::PayoutList;
use crate::layout::Shell;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found" category=PAGE_CAT_SYSTEM>
            <div class="page__content page__content--empty">
                <h1 class="page__title">"Page not found"</h1>
                <a href="/products">"Back to products"</a>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/promotors") view=PromotorList />
                    <Route path=path!("/promotors/:id") view=PromotorDetails />
                    <Route path=path!("/warehouses") view=WarehouseList />
                    <Route path=path!("/warehouses/:id") view=WarehouseDetails />
                    <Route path=path!("/drivers") view=DriverList />
                    <Route path=path!("/drivers/:id") view=DriverDetails />
                    <Route path=path!("/banners") view=BannerList />
                    <Route path=path!("/discounts") view=DiscountList />
                    <Route path=path!("/admins") view=AdminList />
                    <Route path=path!("/roles") view=RoleList />
                    <Route path=path!("/payouts") view=PayoutList />
                </Routes>
            </Shell>
        </Router>
    }
}
