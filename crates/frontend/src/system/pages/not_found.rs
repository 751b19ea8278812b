use crate::shared::components::nav_link::NavLink;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Страница "не найдено": сюда же приводят неизвестные слаги деталей
#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    use_document_title("Not Found | KRINOK");

    view! {
        <div class="not-found-page section">
            <div class="container not-found__inner">
                <p class="label">"404"</p>
                <h1 class="heading-xl">"This Page Went Dark"</h1>
                <p class="body-lg">
                    "The address doesn't match anything in the archive. The work, however, is still here."
                </p>
                <NavLink href="/" class="cta-button">"Back to Home"</NavLink>
            </div>
        </div>
    }
}
