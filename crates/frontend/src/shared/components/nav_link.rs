use crate::layout::global_context::{AppGlobalContext, CursorState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Внутренняя ссылка: клиентская навигация без перезагрузки wasm-бандла
/// плюс hover-режим кастомного курсора.
#[component]
pub fn NavLink(
    /// Целевой путь внутри сайта
    #[prop(into)]
    href: String,

    /// CSS-классы ссылки
    #[prop(optional, into)]
    class: String,

    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let navigate = use_navigate();
    let to = href.clone();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                ctx.close_menu();
                ctx.set_cursor(CursorState::Default);
                navigate(&to, NavigateOptions::default());
            }
            on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
            on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
        >
            {children()}
        </a>
    }
}
