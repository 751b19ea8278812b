pub mod filter_pills;
pub mod filter_tags;
pub mod project_card;
pub mod state;

use self::filter_pills::FilterPills;
use self::filter_tags::FilterTags;
use self::project_card::{ProjectCard, ProjectCardData};
use self::state::create_state;
use crate::shared::data;
use crate::shared::use_document_title;
use contracts::domain::project::{classify, filter_projects, resolve_tags};
use leptos::prelude::*;

/// Страница "Work": хиро + сетка проектов с фильтром
#[component]
#[allow(non_snake_case)]
pub fn WorkPage() -> impl IntoView {
    use_document_title("Work | KRINOK");

    view! {
        <div class="work-page">
            <section class="work-hero">
                <div class="container">
                    <p class="label">"Our Work"</p>
                    <h1 class="heading-xl">"SELECTED"<br/>"PROJECTS"</h1>
                </div>
            </section>

            <section class="work-grid section">
                <div class="container">
                    <ProjectGrid />
                </div>
            </section>
        </div>
    }
}

/// Сетка проектов с двухуровневым фильтром (категория → тег).
///
/// Выборка, доступные теги и классы размеров пересчитываются заново на
/// каждом переходе фильтра — каталог маленький, мемоизация по выбору
/// покрывает всё, что нужно.
#[component]
pub fn ProjectGrid() -> impl IntoView {
    let catalog = data::catalog();
    let state = create_state();

    let rows = Memo::new(move |_| {
        let selection = state.selection.get();
        let filtered = filter_projects(catalog, &selection);
        classify(&filtered)
            .into_iter()
            .enumerate()
            .map(|(index, item)| ProjectCardData {
                project: item.project.clone(),
                size: item.size,
                index,
            })
            .collect::<Vec<_>>()
    });

    let tags = Memo::new(move |_| {
        state
            .selection
            .with(|s| resolve_tags(catalog, &s.active_category))
    });

    view! {
        <div class="project-grid-container">
            <FilterPills state=state />
            <FilterTags state=state tags=tags />

            <div class="project-grid">
                <For
                    each=move || rows.get()
                    key=|row| row.project.id.clone()
                    children=move |row: ProjectCardData| {
                        view! { <ProjectCard data=row /> }
                    }
                />
            </div>

            <Show when=move || rows.with(|r| r.is_empty())>
                <div class="no-results">
                    <p>"No projects found with the selected filters."</p>
                </div>
            </Show>
        </div>
    }
}
