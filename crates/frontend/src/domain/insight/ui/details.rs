use crate::shared::components::nav_link::NavLink;
use crate::shared::data;
use crate::shared::date_utils::format_date;
use crate::shared::use_document_title;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::insight::Insight;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Блок авторского текста статьи
#[derive(Debug, Clone, PartialEq, Eq)]
enum ContentBlock {
    Heading(String),
    Paragraph(String),
}

/// Разбить текст статьи на блоки: абзацы разделены пустой строкой,
/// префикс `## ` помечает подзаголовок.
fn content_blocks(content: &str) -> Vec<ContentBlock> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| match block.strip_prefix("## ") {
            Some(heading) => ContentBlock::Heading(heading.to_string()),
            None => ContentBlock::Paragraph(block.to_string()),
        })
        .collect()
}

/// Страница статьи `/insights/:slug`
#[component]
#[allow(non_snake_case)]
pub fn InsightDetailPage() -> impl IntoView {
    let params = use_params_map();
    let insights = data::insights();

    let post = Memo::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        insights.post_by_slug(&slug).cloned()
    });

    view! {
        <Show
            when=move || post.with(|p| p.is_some())
            fallback=|| view! { <NotFoundPage /> }
        >
            {move || post.get().map(|post| view! { <InsightDetailContent post=post /> })}
        </Show>
    }
}

#[component]
fn InsightDetailContent(post: Insight) -> impl IntoView {
    use_document_title(format!("{} | KRINOK", post.title));

    let blocks = content_blocks(&post.content);

    view! {
        <article class="insight-detail">
            <div class="insight-detail__back">
                <NavLink href="/insights" class="back-link">"← All Articles"</NavLink>
            </div>

            <header class="insight-detail__header container">
                <span class="post-category">{post.category.clone()}</span>
                <h1 class="heading-xl">{post.title.clone()}</h1>
                <p class="post-meta">
                    {format!(
                        "{} · {} · {}",
                        post.author,
                        format_date(&post.date),
                        post.read_time
                    )}
                </p>
            </header>

            <div class="insight-detail__body container">
                {blocks
                    .into_iter()
                    .map(|block| match block {
                        ContentBlock::Heading(text) => {
                            view! { <h2 class="content-h2">{text}</h2> }.into_any()
                        }
                        ContentBlock::Paragraph(text) => {
                            view! { <p class="body-lg">{text}</p> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_blocks_split_paragraphs_and_headings() {
        let content = "First paragraph.\n\n## A heading\n\nSecond paragraph.";
        assert_eq!(
            content_blocks(content),
            vec![
                ContentBlock::Paragraph("First paragraph.".to_string()),
                ContentBlock::Heading("A heading".to_string()),
                ContentBlock::Paragraph("Second paragraph.".to_string()),
            ]
        );
    }

    #[test]
    fn test_content_blocks_skip_blank_runs() {
        assert!(content_blocks("").is_empty());
        assert_eq!(content_blocks("one\n\n\n\ntwo").len(), 2);
    }

    #[test]
    fn test_hash_marks_inside_paragraph_are_text() {
        let blocks = content_blocks("line with ## inside stays a paragraph");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], ContentBlock::Paragraph(_)));
    }
}
