use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::components::hero_scene::HeroScene;
use crate::shared::components::marquee::Marquee;
use crate::shared::components::nav_link::NavLink;
use crate::shared::components::reveal::Reveal;
use crate::shared::data;
use crate::shared::gradient;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Слоган по словам: каждому слову своя задержка появления (CSS)
fn hero_text(text: &str) -> AnyView {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            let style = format!("animation-delay: {}ms", 200 + index * 90);
            view! { <span class="hero-word" style=style>{format!("{word} ")}</span> }
        })
        .collect_view()
        .into_any()
}

/// Главная: хиро с канвас-сценой, превью практик, бегущая строка
/// клиентов, избранные работы.
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    use_document_title("KRINOK | Creative Agency");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let site = data::site();
    let clients = data::clients().names();

    let featured: Vec<_> = data::catalog()
        .featured_projects()
        .into_iter()
        .cloned()
        .collect();

    let practices = [
        (
            "01",
            "Immersive Shows",
            "Projection-mapped venues, kinetic light and installations that make the room itself perform.",
        ),
        (
            "02",
            "Brand Content",
            "Identities, films and editorial series — visual narratives audiences keep thinking about.",
        ),
        (
            "03",
            "Digital Experiences",
            "Websites, commerce and applications designed like publications and engineered like products.",
        ),
    ];

    view! {
        <div class="home">
            <section class="hero section">
                <div class="hero-scene-wrapper">
                    <HeroScene />
                </div>
                <div class="hero__content">
                    <p class="label">"Independent Creative Agency"</p>
                    <h1 class="hero__title heading-xl">{hero_text(&site.tagline.to_uppercase())}</h1>
                </div>
            </section>

            <section class="services section">
                <div class="container">
                    <div class="services__grid">
                        {practices
                            .into_iter()
                            .map(|(number, title, text)| {
                                view! {
                                    <Reveal class="service-box-wrap">
                                        <div
                                            class="service-box"
                                            on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                                            on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                                        >
                                            <span class="label">{number}</span>
                                            <h3 class="heading-md">{title}</h3>
                                            <p class="body-lg">{text}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <Marquee items=clients />

            <section class="featured-work section">
                <div class="container">
                    <p class="label">"Selected Work"</p>
                    <div class="featured-work__grid">
                        {featured
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                let href = format!("/work/{}", project.slug);
                                let style =
                                    format!("background: {}", gradient::placeholder_gradient(index));
                                view! {
                                    <Reveal>
                                        <NavLink href=href class="featured-work__card">
                                            <div class="featured-work__image" style=style></div>
                                            <h3 class="heading-sm">{project.title.clone()}</h3>
                                            <span class="featured-work__client">
                                                {project.client.clone()}
                                            </span>
                                        </NavLink>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <NavLink href="/work" class="cta-button cta-button--ghost">
                        "All Projects"
                    </NavLink>
                </div>
            </section>

            <section class="home-cta section">
                <div class="container">
                    <h2 class="heading-lg">"Have an audience to move?"</h2>
                    <NavLink href="/contact" class="cta-button">"Start a Project"</NavLink>
                </div>
            </section>
        </div>
    }
}
