use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::layout::page_transition::PageTransition;
use crate::routes::routes::AppRoutes;
use crate::shared::components::cursor::Cursor;
use crate::shared::components::loading_screen::LoadingScreen;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Router>
            <LoadingScreen />
            <Cursor />
            <Header />
            <PageTransition />
            <main>
                <AppRoutes />
            </main>
        </Router>
    }
}
