use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::components::hero_scene::HeroScene;
use crate::shared::data;
use crate::shared::use_document_title;
use leptos::prelude::*;

/// Страница контактов: канвас-сцена на фоне + карточки каналов связи
#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    use_document_title("Contact | KRINOK");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let site = data::site();

    let email = site.email.clone();
    let mailto = format!("mailto:{email}");
    let phone = site.phone.clone();
    let phone_href = format!("tel:{}", phone.replace([' ', '(', ')', '-'], ""));
    let socials = site.socials.clone();

    view! {
        <div class="contact-page">
            <div class="contact-scene">
                <HeroScene />
            </div>
            <div class="contact-overlay"></div>

            <div class="contact-content container">
                <header class="contact-header">
                    <p class="label">"Get in Touch"</p>
                    <h1 class="heading-xl">"Let's Make Something"</h1>
                </header>

                <div class="contact-cards">
                    <a
                        class="contact-card"
                        href=mailto
                        on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                        on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                    >
                        <span class="contact-card__label label">"Email"</span>
                        <span class="contact-card__value heading-sm">{email}</span>
                    </a>

                    <a
                        class="contact-card"
                        href=phone_href
                        on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                        on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                    >
                        <span class="contact-card__label label">"Phone"</span>
                        <span class="contact-card__value heading-sm">{phone}</span>
                    </a>

                    <a
                        class="contact-card"
                        href="https://maps.google.com"
                        target="_blank"
                        rel="noopener noreferrer"
                        on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                        on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                    >
                        <span class="contact-card__label label">"Studio"</span>
                        <span class="contact-card__value heading-sm">
                            "Maridalsveien 17, Oslo"
                        </span>
                    </a>
                </div>

                <div class="contact-social">
                    <p class="label">"Follow Us"</p>
                    <div class="contact-social__links">
                        {socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a href=social.url target="_blank" rel="noopener noreferrer">
                                        {social.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
