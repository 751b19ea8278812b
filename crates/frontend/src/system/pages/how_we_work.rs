use crate::shared::components::cta::CtaSection;
use crate::shared::components::reveal::Reveal;
use crate::shared::use_document_title;
use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 6] = [
    (
        "01",
        "Discovery",
        "We sit with your team and your audience until we can state the problem in one sentence you agree with.",
    ),
    (
        "02",
        "Strategy",
        "The sentence becomes a plan: medium, venues, channels, budget envelope and what success will measurably look like.",
    ),
    (
        "03",
        "Design",
        "Concepts are built as prototypes, not decks — something you can stand in, click through or hold.",
    ),
    (
        "04",
        "Production",
        "Film shoots, fabrication, engineering. One producer owns the calendar across all of it.",
    ),
    (
        "05",
        "Launch",
        "Opening night is staffed by the people who built the piece; nothing is handed to a subcontractor cold.",
    ),
    (
        "06",
        "Growth",
        "We stay through the first season: measuring, tuning and feeding what we learn into the next brief.",
    ),
];

/// Страница процесса
#[component]
#[allow(non_snake_case)]
pub fn HowWeWorkPage() -> impl IntoView {
    use_document_title("How We Work | KRINOK");

    view! {
        <div class="process-page">
            <section class="process-hero section">
                <div class="container">
                    <p class="label">"Our Process"</p>
                    <h1 class="heading-xl">"How We Work"</h1>
                </div>
            </section>

            <section class="process-steps section">
                <div class="container">
                    {STEPS
                        .into_iter()
                        .map(|(number, title, text)| {
                            view! {
                                <Reveal>
                                    <div class="process-step">
                                        <span class="process-step__number label">{number}</span>
                                        <div class="process-step__body">
                                            <h3 class="heading-md">{title}</h3>
                                            <p class="body-lg">{text}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <CtaSection
                title="Ready to start your project?"
                text="Let's discuss how we can help bring your vision to life."
            />
        </div>
    }
}
