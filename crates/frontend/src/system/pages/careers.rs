use crate::shared::components::reveal::Reveal;
use crate::shared::data;
use crate::shared::use_document_title;
use leptos::prelude::*;

const PERKS: [&str; 6] = [
    "Studio weeks, not crunch weeks",
    "Annual R&D budget per person",
    "Show credits on everything you touch",
    "Hardware of your choice",
    "Conference and festival travel",
    "Profit share after year one",
];

const OPENINGS: [(&str, &str, &str); 3] = [
    ("Creative Technologist", "Full-time", "Oslo / Hybrid"),
    ("Senior Motion Designer", "Full-time", "Remote, EU time zones"),
    ("Producer, Live Events", "Contract", "On-site"),
];

/// Страница вакансий
#[component]
#[allow(non_snake_case)]
pub fn CareersPage() -> impl IntoView {
    use_document_title("Careers | KRINOK");
    let email = data::site().email.clone();
    let mailto = format!("mailto:{email}");

    view! {
        <div class="careers-page">
            <section class="careers-hero section">
                <div class="container">
                    <p class="label">"Join Our Team"</p>
                    <h1 class="heading-xl">"Careers at KRINOK"</h1>
                    <p class="body-lg">
                        "We hire people who want their name on the work — directors who prototype, engineers who storyboard."
                    </p>
                </div>
            </section>

            <section class="careers-perks section">
                <div class="container">
                    <p class="label">"Perks & Benefits"</p>
                    <div class="perks-grid">
                        {PERKS
                            .into_iter()
                            .map(|perk| view! { <div class="perk-chip body-md">{perk}</div> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="careers-openings section">
                <div class="container">
                    <p class="label">"Current Openings"</p>
                    {OPENINGS
                        .into_iter()
                        .map(|(title, kind, location)| {
                            view! {
                                <Reveal>
                                    <div class="opening-row">
                                        <h3 class="heading-sm">{title}</h3>
                                        <span class="opening-row__meta">
                                            {format!("{kind} · {location}")}
                                        </span>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}

                    <div class="careers-note">
                        <h3 class="heading-sm">"Don't see your role?"</h3>
                        <p class="body-md">
                            "We're always looking for talented people. Send us your reel or repository."
                        </p>
                        <a class="cta-button" href=mailto>{email}</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
