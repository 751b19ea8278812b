use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::use_document_title;
use contracts::domain::site::LegalDoc;
use leptos::prelude::*;

/// Общий каркас юридических страниц
#[component]
fn LegalContent(doc: LegalDoc) -> impl IntoView {
    use_document_title(format!("{} | KRINOK", doc.title));

    view! {
        <div class="legal-page">
            <section class="legal-hero">
                <div class="container">
                    <NavLink href="/" class="back-link">"← Home"</NavLink>
                    <h1 class="heading-xl">{doc.title.clone()}</h1>
                    <p class="last-updated">{format!("Last updated: {}", doc.last_updated)}</p>
                </div>
            </section>

            <section class="legal-content section">
                <div class="container">
                    <article class="legal-article">
                        {doc.sections
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <div class="legal-section">
                                        <h2 class="heading-sm">{section.title}</h2>
                                        <p class="body-md">{section.content}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </article>
                </div>
            </section>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalContent doc=data::legal().privacy.clone() /> }
}

#[component]
#[allow(non_snake_case)]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalContent doc=data::legal().terms.clone() /> }
}
