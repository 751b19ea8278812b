//! Зеркалирование выбора фильтра работ в строку запроса.
//!
//! `/work?category=brand&tag=video` восстанавливает состояние фильтра при
//! заходе по прямой ссылке; каждое изменение выбора пишется обратно через
//! `history.replaceState`, не создавая записей в истории.

use contracts::domain::project::{CategoryFilter, Selection};
use serde::{Deserialize, Serialize};

/// Схема строки запроса страницы работ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Разобрать `location.search`; мусор в строке молча игнорируется
pub fn parse_search(search: &str) -> WorkQuery {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Восстановить выбор из строки запроса.
///
/// Категория применяется до тега: диплинк проходит через те же переходы,
/// что и клики, и не может обойти сброс тега при смене категории.
pub fn selection_from_search(search: &str) -> Selection {
    let query = parse_search(search);
    let mut selection = Selection::new();
    if let Some(category) = query.category {
        selection.select_category(CategoryFilter::from_code(&category));
    }
    selection.select_tag(query.tag);
    selection
}

/// Сериализовать выбор обратно; пустой выбор даёт пустую строку
pub fn to_query_string(selection: &Selection) -> String {
    let query = WorkQuery {
        category: match &selection.active_category {
            CategoryFilter::All => None,
            CategoryFilter::Category(id) => Some(id.clone()),
        },
        tag: selection.active_tag.clone(),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) if !qs.is_empty() => format!("?{qs}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_is_identity_selection() {
        let selection = selection_from_search("");
        assert_eq!(selection, Selection::new());
        assert_eq!(to_query_string(&selection), "");
    }

    #[test]
    fn test_round_trip() {
        let search = "?category=brand&tag=video";
        let selection = selection_from_search(search);
        assert_eq!(
            selection.active_category,
            CategoryFilter::Category("brand".to_string())
        );
        assert_eq!(selection.active_tag.as_deref(), Some("video"));
        assert_eq!(to_query_string(&selection), search);
    }

    #[test]
    fn test_tag_only_deep_link() {
        let selection = selection_from_search("?tag=video");
        assert_eq!(selection.active_category, CategoryFilter::All);
        assert_eq!(selection.active_tag.as_deref(), Some("video"));
    }

    #[test]
    fn test_explicit_all_category() {
        let selection = selection_from_search("?category=all&tag=web");
        assert_eq!(selection.active_category, CategoryFilter::All);
        // "all" не сериализуется обратно — канонический URL короче
        assert_eq!(to_query_string(&selection), "?tag=web");
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let selection = selection_from_search("?utm_source=mail&ref=nav");
        assert_eq!(selection, Selection::new());
    }
}
