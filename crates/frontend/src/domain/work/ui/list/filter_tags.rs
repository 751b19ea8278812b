use super::state::WorkListState;
use crate::layout::global_context::{AppGlobalContext, CursorState};
use leptos::prelude::*;

/// Второй уровень фильтра: теги выбранной категории.
///
/// Список тегов зависит от первого фасета и приходит сверху сигналом —
/// контрол сам его не пересчитывает.
#[component]
pub fn FilterTags(
    state: WorkListState,
    #[prop(into)] tags: Signal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="filter-tags">
            <button
                class=move || {
                    if state.selection.with(|s| s.active_tag.is_none()) {
                        "filter-tag active"
                    } else {
                        "filter-tag"
                    }
                }
                on:click=move |_| state.select_tag(None)
                on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
            >
                "All Types"
            </button>

            <For
                each=move || tags.get()
                key=|tag| tag.clone()
                children=move |tag: String| {
                    let value = tag.clone();
                    let active = tag.clone();
                    view! {
                        <button
                            class=move || {
                                let is_active = state
                                    .selection
                                    .with(|s| s.active_tag.as_deref() == Some(active.as_str()));
                                if is_active { "filter-tag active" } else { "filter-tag" }
                            }
                            on:click=move |_| state.select_tag(Some(value.clone()))
                            on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                            on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                        >
                            {tag}
                        </button>
                    }
                }
            />
        </div>
    }
}
