use crate::layout::global_context::AppGlobalContext;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Длительность шторки перехода, мс (синхронизирована с CSS)
const TRANSITION_MS: u32 = 600;

/// Шторка перехода между страницами.
///
/// Слушает смену маршрута: закрывает меню, прокручивает к началу и
/// коротко показывает оверлей поверх контента.
#[component]
pub fn PageTransition() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let location = use_location();

    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if let Some(prev_path) = prev {
            if prev_path != path {
                ctx.close_menu();
                ctx.set_transitioning(true);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(TRANSITION_MS).await;
                    ctx.set_transitioning(false);
                });
            }
        }
        path
    });

    view! {
        <div class=move || {
            if ctx.transitioning.get() {
                "page-transition page-transition--active"
            } else {
                "page-transition"
            }
        }></div>
    }
}
