use crate::layout::global_context::{AppGlobalContext, CursorState};
use crate::shared::gradient;
use crate::shared::scroll_reveal::use_reveal;
use contracts::domain::project::{Project, SizeClass};
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Данные карточки: проект + класс размера в текущей выборке
#[derive(Clone, PartialEq)]
pub struct ProjectCardData {
    pub project: Project,
    pub size: SizeClass,
    pub index: usize,
}

/// Карточка проекта: ссылка на кейс, наклон за мышью, reveal при скролле.
/// Вместо съёмочного арта — детерминированный градиент по позиции.
#[component]
pub fn ProjectCard(data: ProjectCardData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let navigate = use_navigate();
    let card_ref = NodeRef::<html::Div>::new();
    let link_ref = NodeRef::<html::A>::new();
    use_reveal(card_ref);

    // inline-стиль наклона; пустая строка возвращает карточку на место
    let (tilt, set_tilt) = signal(String::new());

    let ProjectCardData {
        project,
        size,
        index,
    } = data;
    let href = format!("/work/{}", project.slug);
    let link_href = href.clone();
    let image_style = format!(
        "background: {}; aspect-ratio: {};",
        gradient::placeholder_gradient(index),
        if size == SizeClass::Large { "4 / 5" } else { "3 / 4" },
    );

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(link) = link_ref.get_untracked() else {
            return;
        };
        let rect = link.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let center_x = rect.width() / 2.0;
        let center_y = rect.height() / 2.0;
        let rotate_x = (y - center_y) / 20.0;
        let rotate_y = (center_x - x) / 20.0;
        set_tilt.set(format!(
            "transform: perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)"
        ));
    };

    view! {
        <div
            node_ref=card_ref
            class=format!("reveal {}", size.css_class())
            style=format!("transition-delay: {}ms", index * 60)
        >
            <a
                node_ref=link_ref
                href=href
                class="project-card"
                style=move || tilt.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.set_cursor(CursorState::Default);
                    navigate(&link_href, NavigateOptions::default());
                }
                on:mouseenter=move |_| ctx.set_cursor(CursorState::View)
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| {
                    ctx.set_cursor(CursorState::Default);
                    set_tilt.set(String::new());
                }
            >
                <div class="project-card__image" style=image_style>
                    <div class="project-card__overlay"></div>
                </div>
                <div class="project-card__content">
                    <div class="project-card__tags">
                        {project
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="project-card__tag">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <h3 class="project-card__title">{project.title.clone()}</h3>
                </div>
            </a>
        </div>
    }
}
