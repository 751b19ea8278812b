use crate::shared::components::cta::CtaSection;
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::icons::icon;
use crate::shared::use_document_title;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::service::Service;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница услуги `/services/:slug`
#[component]
#[allow(non_snake_case)]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let services = data::services();

    let service = Memo::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        services.service_by_slug(&slug).cloned()
    });

    view! {
        <Show
            when=move || service.with(|s| s.is_some())
            fallback=|| view! { <NotFoundPage /> }
        >
            {move || {
                service
                    .get()
                    .map(|service| view! { <ServiceDetailContent service=service /> })
            }}
        </Show>
    }
}

#[component]
fn ServiceDetailContent(service: Service) -> impl IntoView {
    use_document_title(format!("{} | KRINOK", service.title));

    view! {
        <div class="service-detail">
            <section class="service-hero section">
                <div class="container">
                    <NavLink href="/services" class="back-link">"← All Services"</NavLink>
                    <p class="label">{service.subtitle.clone()}</p>
                    <h1 class="heading-xl">{service.title.clone()}</h1>
                    <p class="body-lg service-hero__description">{service.description.clone()}</p>
                    <div class="service-hero__stat">
                        <span class="stat-value">{service.stats.value.clone()}</span>
                        <span class="stat-label">{service.stats.label.clone()}</span>
                    </div>
                </div>
            </section>

            <section class="features-section section">
                <div class="container">
                    <p class="label">"What's Included"</p>
                    <div class="features-grid">
                        {service
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="feature-card">
                                        <span class="feature-card__icon">
                                            {icon(&feature.icon)}
                                        </span>
                                        <h3 class="heading-sm">{feature.title.clone()}</h3>
                                        <p class="body-md">{feature.description.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="tech-section section">
                <div class="container">
                    <p class="label">"Tools We Reach For"</p>
                    <div class="tech-pills">
                        {service
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="tech-pill">{tech.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            {service.product_list.clone().map(|products| {
                view! {
                    <section class="products-section section">
                        <div class="container">
                            <p class="label">"Typical Deliverables"</p>
                            <ul class="product-list">
                                {products
                                    .into_iter()
                                    .map(|product| view! { <li class="body-md">{product}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </section>
                }
            })}

            <section class="case-section section">
                <div class="container">
                    <p class="label">"Proof"</p>
                    <div class="case-highlight">
                        <h3 class="heading-md">{service.case_study.client.clone()}</h3>
                        <p class="case-highlight__result">{service.case_study.result.clone()}</p>
                        <p class="body-md">{service.case_study.description.clone()}</p>
                    </div>
                </div>
            </section>

            <CtaSection
                title="Sounds like your project?"
                text="Let's discuss how this practice applies to what you're building."
            />
        </div>
    }
}
