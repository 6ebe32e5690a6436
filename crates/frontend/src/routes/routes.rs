use crate::dashboards::annual::ui::dashboard::AnnualSalesDashboard;
use crate::dashboards::halfyearly::ui::dashboard::HalfYearlySalesDashboard;
use crate::dashboards::monthly::ui::dashboard::MonthlySalesDashboard;
use crate::dashboards::quarterly::ui::dashboard::QuarterlySalesDashboard;
use crate::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/monthly") view=MonthlySalesDashboard />
                    <Route path=path!("/quarterly") view=QuarterlySalesDashboard />
                    <Route path=path!("/halfyearly") view=HalfYearlySalesDashboard />
                    <Route path=path!("/annual") view=AnnualSalesDashboard />
                </Routes>
            </main>
        </Router>
    }
}
