use crate::domain::industry::ui::details::IndustryDetailPage;
use crate::domain::industry::ui::list::IndustriesPage;
use crate::domain::insight::ui::details::InsightDetailPage;
use crate::domain::insight::ui::list::InsightsPage;
use crate::domain::service::ui::details::ServiceDetailPage;
use crate::domain::service::ui::list::ServicesPage;
use crate::domain::work::ui::details::CaseStudyPage;
use crate::domain::work::ui::list::WorkPage;
use crate::system::pages::about::AboutPage;
use crate::system::pages::careers::CareersPage;
use crate::system::pages::clients::ClientsPage;
use crate::system::pages::contact::ContactPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::how_we_work::HowWeWorkPage;
use crate::system::pages::legal::{PrivacyPage, TermsPage};
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Таблица маршрутов сайта; неизвестный путь уходит в NotFound
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/work") view=WorkPage />
            <Route path=path!("/work/:slug") view=CaseStudyPage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/services/:slug") view=ServiceDetailPage />
            <Route path=path!("/industries") view=IndustriesPage />
            <Route path=path!("/industries/:slug") view=IndustryDetailPage />
            <Route path=path!("/insights") view=InsightsPage />
            <Route path=path!("/insights/:slug") view=InsightDetailPage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/about/careers") view=CareersPage />
            <Route path=path!("/about/how-we-work") view=HowWeWorkPage />
            <Route path=path!("/clients") view=ClientsPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/privacy") view=PrivacyPage />
            <Route path=path!("/terms") view=TermsPage />
        </Routes>
    }
}
