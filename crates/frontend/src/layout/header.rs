use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use leptos::prelude::*;

/// Фиксированная шапка + полноэкранное меню.
///
/// Раскрытие меню — CSS clip-path по классу `menu--open`; при навигации
/// меню закрывает `PageTransition`.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let site = data::site();

    let nav_links = site.nav.clone();
    let socials = site.socials.clone();
    let email = site.email.clone();
    let phone = site.phone.clone();
    let mailto = format!("mailto:{email}");
    let phone_href = format!("tel:{}", phone.replace([' ', '(', ')', '-'], ""));

    view! {
        <header class="header">
            <div class="header__inner">
                <NavLink href="/" class="header__logo">{site.name.clone()}</NavLink>

                <button
                    class="header__menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_menu()
                    on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                    on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                >
                    <span class=move || {
                        if ctx.menu_open.get() { "hamburger active" } else { "hamburger" }
                    }>
                        <span class="hamburger__line"></span>
                        <span class="hamburger__line"></span>
                    </span>
                </button>
            </div>
        </header>

        <div class=move || if ctx.menu_open.get() { "menu menu--open" } else { "menu" }>
            <nav class="menu__nav">
                {nav_links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <NavLink href=link.href class="menu__link">{link.label}</NavLink>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="menu__footer">
                <div class="menu__contact">
                    <a href=mailto>{email}</a>
                    <a href=phone_href>{phone}</a>
                </div>
                <div class="menu__social">
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
    }
}
