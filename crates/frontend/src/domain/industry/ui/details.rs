use crate::shared::components::cta::CtaSection;
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::use_document_title;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::industry::Industry;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница отрасли `/industries/:slug`
#[component]
#[allow(non_snake_case)]
pub fn IndustryDetailPage() -> impl IntoView {
    let params = use_params_map();
    let industries = data::industries();

    let industry = Memo::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        industries.industry_by_slug(&slug).cloned()
    });

    view! {
        <Show
            when=move || industry.with(|i| i.is_some())
            fallback=|| view! { <NotFoundPage /> }
        >
            {move || {
                industry
                    .get()
                    .map(|industry| view! { <IndustryDetailContent industry=industry /> })
            }}
        </Show>
    }
}

#[component]
fn IndustryDetailContent(industry: Industry) -> impl IntoView {
    use_document_title(format!("{} | KRINOK", industry.title));

    view! {
        <div class="industry-detail">
            <section class="industry-hero section">
                <div class="container">
                    <NavLink href="/industries" class="back-link">"← All Industries"</NavLink>
                    <p class="label">{industry.subtitle.clone()}</p>
                    <h1 class="heading-xl">{industry.title.clone()}</h1>
                    <p class="body-lg industry-hero__description">{industry.description.clone()}</p>
                    <div class="industry-hero__stat">
                        <span class="stat-value">{industry.stats.value.clone()}</span>
                        <span class="stat-label">{industry.stats.label.clone()}</span>
                    </div>
                </div>
            </section>

            <section class="solutions-section section">
                <div class="container">
                    <p class="label">"What We Bring"</p>
                    <div class="solutions-list">
                        {industry
                            .solutions
                            .iter()
                            .map(|solution| {
                                view! {
                                    <div class="solution-card">
                                        <h3 class="heading-sm">{solution.title.clone()}</h3>
                                        <p class="body-md">{solution.description.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="case-section section">
                <div class="container">
                    <p class="label">"In Practice"</p>
                    {industry
                        .case_studies
                        .iter()
                        .map(|case| {
                            view! {
                                <div class="case-highlight">
                                    <h3 class="heading-md">{case.client.clone()}</h3>
                                    <p class="case-highlight__result">{case.result.clone()}</p>
                                    <p class="body-md">{case.description.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="tech-section section">
                <div class="container">
                    <p class="label">"Usual Stack"</p>
                    <div class="tech-pills">
                        {industry
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="tech-pill">{tech.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaSection
                title="Working in this space?"
                text="We probably have a war story and a prototype to show you."
            />
        </div>
    }
}
