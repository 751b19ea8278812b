use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::gradient;
use crate::shared::use_document_title;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::project::Project;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница кейса `/work/:slug`.
///
/// Неизвестный slug — это не ошибка, а страница "не найдено".
#[component]
#[allow(non_snake_case)]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = data::catalog();

    // слаг реактивен: переход между кейсами не пересоздаёт страницу
    let project = Memo::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        catalog.project_by_slug(&slug).cloned()
    });

    view! {
        <Show
            when=move || project.with(|p| p.is_some())
            fallback=|| view! { <NotFoundPage /> }
        >
            {move || {
                project
                    .get()
                    .map(|project| view! { <CaseStudyContent project=project /> })
            }}
        </Show>
    }
}

#[component]
fn CaseStudyContent(project: Project) -> impl IntoView {
    use_document_title(format!("{} | KRINOK", project.title));

    let seed = gradient::seed_from_id(&project.id);
    let hero_style = format!("background: {}", gradient::placeholder_gradient(seed));

    view! {
        <div class="case-study">
            <div class="case-study__back">
                <NavLink href="/work" class="back-link">"← Back to Work"</NavLink>
            </div>

            <div class="case-study__grid">
                <div class="case-study__media">
                    <div class="case-study__hero-image" style=hero_style></div>

                    <div class="case-study__content">
                        <p class="body-lg">{project.description.clone()}</p>

                        <div class="case-study__gallery">
                            {(1..=3)
                                .map(|i| {
                                    let style =
                                        format!("background: {}", gradient::gallery_gradient(seed, i));
                                    view! { <div class="gallery-item" style=style></div> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <aside class="case-study__meta">
                    <div class="case-study__meta-inner">
                        <div class="meta-group">
                            <span class="label">"Project"</span>
                            <h1 class="heading-lg">{project.title.clone()}</h1>
                        </div>

                        <div class="meta-group">
                            <span class="label">"Client"</span>
                            <p>{project.client.clone()}</p>
                        </div>

                        <div class="meta-group">
                            <span class="label">"Year"</span>
                            <p>{project.year.clone()}</p>
                        </div>

                        <div class="meta-group">
                            <span class="label">"Services"</span>
                            <ul class="services-list">
                                {project
                                    .services
                                    .iter()
                                    .map(|service| view! { <li>{service.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="meta-group">
                            <span class="label">"Tags"</span>
                            <div class="tags-list">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </aside>
            </div>
        </div>
    }
}
