mod contact;
mod dashboard;
mod home;
mod login;
mod not_found;
mod products;
mod quote;

pub(crate) use contact::ContactPage;
pub(crate) use dashboard::{DashboardPage, PlantDashboardPage, PrintingDashboardPage};
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use products::ProductsPage;
pub(crate) use quote::QuotePage;

use crate::components::PageLoader;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <PageLoader />
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/products") view=ProductsPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/quote") view=QuotePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/dashboard/plant") view=PlantDashboardPage />
            <Route path=path!("/dashboard/printing") view=PrintingDashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
