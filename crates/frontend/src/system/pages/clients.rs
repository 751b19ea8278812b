use crate::shared::components::cta::CtaSection;
use crate::shared::components::marquee::Marquee;
use crate::shared::components::reveal::Reveal;
use crate::shared::data;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Страница клиентов: бегущая строка, сетка имён, истории успеха
#[component]
#[allow(non_snake_case)]
pub fn ClientsPage() -> impl IntoView {
    use_document_title("Clients | KRINOK");
    let clients = data::clients().clients.clone();
    let names = data::clients().names();

    // истории берём из отраслевых кейсов, чтобы цифры жили в одном месте
    let stories: Vec<_> = data::industries()
        .industries
        .iter()
        .flat_map(|industry| industry.case_studies.iter().cloned())
        .take(3)
        .collect();

    view! {
        <div class="clients-page">
            <section class="clients-hero section">
                <div class="container">
                    <p class="label">"Our Clients"</p>
                    <h1 class="heading-xl">"Trusted by Innovators"</h1>
                </div>
            </section>

            <Marquee items=names />

            <section class="clients-grid section">
                <div class="container">
                    <div class="clients-cards">
                        {clients
                            .into_iter()
                            .map(|client| {
                                view! {
                                    <Reveal>
                                        <div class="client-card">
                                            <span class="heading-sm">{client.name}</span>
                                            <span class="client-card__sector label">{client.sector}</span>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="clients-stories section">
                <div class="container">
                    <p class="label">"Success Stories"</p>
                    {stories
                        .into_iter()
                        .map(|case| {
                            view! {
                                <Reveal>
                                    <div class="case-highlight">
                                        <h3 class="heading-md">{case.client}</h3>
                                        <p class="case-highlight__result">{case.result}</p>
                                        <p class="body-md">{case.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <CtaSection
                title="Ready to become our next success story?"
                text="Let's discuss how we can help you achieve your goals."
            />
        </div>
    }
}
