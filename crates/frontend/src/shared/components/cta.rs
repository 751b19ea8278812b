use crate::shared::components::nav_link::NavLink;
use leptos::prelude::*;

/// Призыв к действию в подвале контентных страниц
#[component]
pub fn CtaSection(
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    #[prop(optional, into)] button_label: Option<String>,
) -> impl IntoView {
    let label = button_label.unwrap_or_else(|| "Get in Touch".to_string());

    view! {
        <section class="cta section">
            <div class="container cta__inner">
                <h2 class="heading-lg">{title}</h2>
                <p class="body-lg">{text}</p>
                <NavLink href="/contact" class="cta-button">{label}</NavLink>
            </div>
        </section>
    }
}
