use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::components::cta::CtaSection;
use crate::shared::components::nav_link::NavLink;
use crate::shared::components::reveal::Reveal;
use crate::shared::gradient;
use crate::shared::use_document_title;
use leptos::prelude::*;

const VALUES: [(&str, &str); 4] = [
    (
        "Vision First",
        "Every engagement starts with what the audience should feel, not with the deliverable list.",
    ),
    (
        "Craft Matters",
        "The last five percent of polish is where the first ninety-five percent earns its keep.",
    ),
    (
        "Push Boundaries",
        "If the medium already has a template, we are probably in the wrong medium.",
    ),
    (
        "Collaborate",
        "Directors, engineers and producers sit in one room; the work has no hand-off seams.",
    ),
];

const TEAM: [(&str, &str); 4] = [
    ("Alex Chen", "Founder & Creative Director"),
    ("Sarah Kim", "Head of Technology"),
    ("Marcus Webb", "Design Director"),
    ("Elena Rossi", "Producer"),
];

/// Страница "About": манифест, ценности, команда
#[component]
#[allow(non_snake_case)]
pub fn AboutPage() -> impl IntoView {
    use_document_title("About | KRINOK");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="about-page">
            <section class="about-intro section">
                <div class="container">
                    <p class="label">"Thinkers and Makers"</p>
                    <h1 class="heading-xl">"We Are KRINOK"</h1>
                    <p class="body-lg intro-description">
                        "An independent creative agency turning ordinary into breathtaking. We design and build immersive shows, brand stories and digital products — with our own hands, in our own studio."
                    </p>
                </div>
            </section>

            <section class="about-values section">
                <div class="container">
                    <p class="label">"What We Believe"</p>
                    <div class="values-grid">
                        {VALUES
                            .into_iter()
                            .map(|(title, text)| {
                                view! {
                                    <Reveal>
                                        <div
                                            class="value-card"
                                            on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                                            on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                                        >
                                            <h3 class="heading-sm">{title}</h3>
                                            <p class="body-md">{text}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="about-team section">
                <div class="container">
                    <p class="label">"The People"</p>
                    <div class="team-grid">
                        {TEAM
                            .into_iter()
                            .enumerate()
                            .map(|(index, (name, role))| {
                                let style =
                                    format!("background: {}", gradient::placeholder_gradient(index + 2));
                                view! {
                                    <Reveal>
                                        <div class="team-member">
                                            <div class="team-member__image" style=style></div>
                                            <h3 class="heading-sm">{name}</h3>
                                            <p class="body-md team-member__role">{role}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="about-links section">
                <div class="container about-links__inner">
                    <NavLink href="/about/how-we-work" class="about-links__item">
                        "How We Work →"
                    </NavLink>
                    <NavLink href="/about/careers" class="about-links__item">
                        "Careers →"
                    </NavLink>
                </div>
            </section>

            <CtaSection
                title="Like how we think?"
                text="See the process behind the work, or bring us a problem worth solving."
            />
        </div>
    }
}
