use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::date_utils::format_date;
use crate::shared::use_document_title;
use contracts::domain::insight::{Insight, ALL_CATEGORY};
use leptos::prelude::*;

/// Страница статей: избранное + однофасетный фильтр по рубрике.
/// Фильтр проще портфолио — одна рубрика, без зависимого второго уровня.
#[component]
#[allow(non_snake_case)]
pub fn InsightsPage() -> impl IntoView {
    use_document_title("Insights | KRINOK");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let insights = data::insights();

    let (active_category, set_active_category) = signal(ALL_CATEGORY.to_string());

    let posts = Memo::new(move |_| {
        active_category.with(|category| {
            insights
                .filter_by_category(category)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let featured: Vec<Insight> = insights.featured().into_iter().cloned().collect();
    let mut pill_labels = vec![ALL_CATEGORY.to_string()];
    pill_labels.extend(insights.categories.iter().cloned());

    view! {
        <div class="insights-page">
            <section class="insights-hero section">
                <div class="container">
                    <p class="label">"Knowledge Hub"</p>
                    <h1 class="heading-xl">"Insights & Articles"</h1>
                    <p class="body-lg insights-hero__subtitle">
                        "Notes from the studio on craft, technology and the business of making things people remember."
                    </p>
                </div>
            </section>

            <section class="featured-section section">
                <div class="container">
                    <p class="label">"Featured"</p>
                    <div class="featured-grid">
                        {featured
                            .into_iter()
                            .map(|post| {
                                let href = format!("/insights/{}", post.slug);
                                view! {
                                    <NavLink href=href class="featured-card">
                                        <div class="featured-card__image"></div>
                                        <div class="featured-card__content">
                                            <span class="post-category">{post.category.clone()}</span>
                                            <h3 class="heading-md">{post.title.clone()}</h3>
                                            <p class="body-md">{post.excerpt.clone()}</p>
                                            <span class="post-meta">
                                                {format!(
                                                    "{} · {}",
                                                    format_date(&post.date),
                                                    post.read_time
                                                )}
                                            </span>
                                        </div>
                                    </NavLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="posts-section section">
                <div class="container">
                    <div class="category-pills">
                        {pill_labels
                            .into_iter()
                            .map(|label| {
                                let value = label.clone();
                                let active = label.clone();
                                view! {
                                    <button
                                        class=move || {
                                            if active_category.with(|c| *c == active) {
                                                "filter-pill active"
                                            } else {
                                                "filter-pill"
                                            }
                                        }
                                        on:click=move |_| set_active_category.set(value.clone())
                                        on:mouseenter=move |_| ctx.set_cursor(CursorState::Hover)
                                        on:mouseleave=move |_| ctx.set_cursor(CursorState::Default)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="post-list">
                        <For
                            each=move || posts.get()
                            key=|post| post.id.clone()
                            children=move |post: Insight| {
                                let href = format!("/insights/{}", post.slug);
                                view! {
                                    <NavLink href=href class="post-card">
                                        <span class="post-category">{post.category.clone()}</span>
                                        <h3 class="heading-sm">{post.title.clone()}</h3>
                                        <p class="body-md">{post.excerpt.clone()}</p>
                                        <span class="post-meta">
                                            {format!(
                                                "{} · {} · {}",
                                                post.author,
                                                format_date(&post.date),
                                                post.read_time
                                            )}
                                        </span>
                                    </NavLink>
                                }
                            }
                        />
                    </div>

                    <Show when=move || posts.with(|p| p.is_empty())>
                        <div class="no-results">
                            <p>"No articles in this category yet."</p>
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}
