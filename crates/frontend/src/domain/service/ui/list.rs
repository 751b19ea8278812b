use crate::shared::components::cta::CtaSection;
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::icons::icon;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Страница услуг: карточки со статистикой и ссылкой на деталь
#[component]
#[allow(non_snake_case)]
pub fn ServicesPage() -> impl IntoView {
    use_document_title("Services | KRINOK");
    let services = data::services().services.clone();

    view! {
        <div class="services-page">
            <section class="services-hero section">
                <div class="container">
                    <p class="label">"What We Do"</p>
                    <h1 class="heading-xl">"From First Sketch to Opening Night"</h1>
                    <p class="body-lg services-hero__subtitle">
                        "Four practices, one studio: immersive experiences, brand content, digital products and the research that feeds them."
                    </p>
                </div>
            </section>

            <section class="services-grid section">
                <div class="container">
                    <div class="services-cards">
                        {services
                            .into_iter()
                            .enumerate()
                            .map(|(index, service)| {
                                let href = format!("/services/{}", service.slug);
                                view! {
                                    <NavLink href=href class="service-card">
                                        <span class="label">{format!("0{}", index + 1)}</span>
                                        <h2 class="heading-md">{service.title.clone()}</h2>
                                        <p class="body-md">{service.subtitle.clone()}</p>
                                        <div class="service-card__stat">
                                            <span class="stat-value">{service.stats.value.clone()}</span>
                                            <span class="stat-label">{service.stats.label.clone()}</span>
                                        </div>
                                        <span class="service-card__arrow">{icon("arrow-right")}</span>
                                    </NavLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaSection
                title="Need a custom solution?"
                text="Tell us what you are trying to make people feel. We will propose the way there."
            />
        </div>
    }
}
