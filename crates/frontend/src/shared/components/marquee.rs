use leptos::prelude::*;

/// Бегущая строка имён клиентов; движение целиком в CSS.
/// Ряд дублируется, чтобы анимация зацикливалась без шва.
#[component]
pub fn Marquee(#[prop(into)] items: Vec<String>) -> impl IntoView {
    let doubled: Vec<String> = items.iter().chain(items.iter()).cloned().collect();

    view! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee__track">
                {doubled
                    .into_iter()
                    .map(|item| view! { <span class="marquee__item">{item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
