use crate::layout::global_context::AppGlobalContext;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Сколько держим шторку до начала анимации ухода, мс
const HOLD_MS: u32 = 1_400;

/// Запас на CSS-анимацию ухода, после него слой убирается из DOM, мс
const EXIT_MS: u32 = 700;

/// Экран загрузки: показывается один раз при старте приложения и
/// закрывается по таймеру (бандл к этому моменту уже исполняется).
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (show, set_show) = signal(true);

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(HOLD_MS).await;
            ctx.set_loading(false);
            TimeoutFuture::new(EXIT_MS).await;
            set_show.set(false);
        });
    });

    view! {
        <Show when=move || show.get()>
            <div class=move || {
                if ctx.loading.get() {
                    "loading-screen"
                } else {
                    "loading-screen loading-screen--done"
                }
            }>
                <div class="loading-screen__logo">"KRINOK"</div>
            </div>
        </Show>
    }
}
