use super::state::WorkListState;
use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::data;
use contracts::domain::project::CategoryFilter;
use leptos::prelude::*;

/// Первый уровень фильтра: пилюли категорий.
///
/// Пилюля "All Work" не входит в каталожный список категорий — её рисует
/// сам контрол.
#[component]
pub fn FilterPills(state: WorkListState) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let categories = data::catalog().categories.clone();

    view! {
        <div class="filter-pills">
            <button
                class=move || {
                    if state.selection.with(|s| s.active_category == CategoryFilter::All) {
                        "filter-pill active"
                    } else {
                        "filter-pill"
                    }
                }
                on:click=move |_| state.select_category("all")
                on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
            >
                "All Work"
            </button>

            {categories
                .into_iter()
                .map(|category| {
                    let id = category.id.clone();
                    let active_id = category.id.clone();
                    view! {
                        <button
                            class=move || {
                                if state.selection.with(|s| s.active_category.code() == active_id) {
                                    "filter-pill active"
                                } else {
                                    "filter-pill"
                                }
                            }
                            on:click=move |_| state.select_category(&id)
                            on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                            on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                        >
                            {category.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
