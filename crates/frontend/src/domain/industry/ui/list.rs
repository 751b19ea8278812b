use crate::shared::components::cta::CtaSection;
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::icons::icon;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Страница отраслей
#[component]
#[allow(non_snake_case)]
pub fn IndustriesPage() -> impl IntoView {
    use_document_title("Industries | KRINOK");
    let industries = data::industries().industries.clone();

    view! {
        <div class="industries-page">
            <section class="industries-hero section">
                <div class="container">
                    <p class="label">"Who We Work With"</p>
                    <h1 class="heading-xl">"Different Rooms, Same Ambition"</h1>
                    <p class="body-lg industries-hero__subtitle">
                        "Museums, flagships, festivals and product companies — anywhere an audience deserves more than a screen."
                    </p>
                </div>
            </section>

            <section class="industries-grid section">
                <div class="container">
                    <div class="industries-cards">
                        {industries
                            .into_iter()
                            .map(|industry| {
                                let href = format!("/industries/{}", industry.slug);
                                view! {
                                    <NavLink href=href class="industry-card">
                                        <h2 class="heading-md">{industry.title.clone()}</h2>
                                        <p class="body-md">{industry.subtitle.clone()}</p>
                                        <div class="industry-card__stat">
                                            <span class="stat-value">{industry.stats.value.clone()}</span>
                                            <span class="stat-label">{industry.stats.label.clone()}</span>
                                        </div>
                                        <span class="industry-card__arrow">{icon("arrow-right")}</span>
                                    </NavLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaSection
                title="Don't see your industry?"
                text="The medium changes, the method doesn't. Tell us about your audience."
            />
        </div>
    }
}
