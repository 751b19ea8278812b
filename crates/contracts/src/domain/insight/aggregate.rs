use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::common::{find_by_slug, Slugged};

/// Статья блога. `content` — абзацы через пустую строку, строки с
/// префиксом `## ` рендерятся подзаголовками.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,

    /// Редакционная рубрика (свободная строка, не категория портфолио)
    pub category: String,

    pub author: String,

    /// Дата публикации в формате ISO `YYYY-MM-DD`
    pub date: String,

    #[serde(rename = "readTime")]
    pub read_time: String,

    pub content: String,

    #[serde(default)]
    pub featured: bool,
}

impl Insight {
    /// Дата публикации, если строка даты корректна
    pub fn published(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Slugged for Insight {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsData {
    #[serde(default)]
    pub posts: Vec<Insight>,

    /// Рубрики для фильтра списка; выводятся из статей, если не заданы
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Псевдорубрика "показать всё" в фильтре статей
pub const ALL_CATEGORY: &str = "All";

impl InsightsData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let mut data: InsightsData =
            serde_json::from_str(raw).context("parsing insights JSON")?;
        if data.categories.is_empty() {
            for post in &data.posts {
                if !data.categories.iter().any(|c| c == &post.category) {
                    data.categories.push(post.category.clone());
                }
            }
        }
        Ok(data)
    }

    /// Однофасетный фильтр списка статей. Неизвестная рубрика даёт пустой
    /// список, `ALL_CATEGORY` возвращает всё в авторском порядке.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Insight> {
        self.posts
            .iter()
            .filter(|post| category == ALL_CATEGORY || post.category == category)
            .collect()
    }

    pub fn featured(&self) -> Vec<&Insight> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Insight> {
        find_by_slug(&self.posts, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: &str, featured: bool) -> Insight {
        Insight {
            id: id.to_string(),
            slug: id.to_string(),
            title: id.to_uppercase(),
            excerpt: String::new(),
            category: category.to_string(),
            author: "KRINOK".to_string(),
            date: "2024-03-15".to_string(),
            read_time: "4 min".to_string(),
            content: String::new(),
            featured,
        }
    }

    fn data() -> InsightsData {
        InsightsData {
            posts: vec![
                post("a", "Design", true),
                post("b", "Technology", false),
                post("c", "Design", false),
            ],
            categories: vec!["Design".to_string(), "Technology".to_string()],
        }
    }

    #[test]
    fn test_all_category_returns_everything_in_order() {
        let data = data();
        let all = data.filter_by_category(ALL_CATEGORY);
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_filter_narrows() {
        let data = data();
        let design = data.filter_by_category("Design");
        assert_eq!(design.len(), 2);
        assert!(design.iter().all(|p| p.category == "Design"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(data().filter_by_category("Sport").is_empty());
    }

    #[test]
    fn test_featured_subset() {
        let data = data();
        let featured = data.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "a");
    }

    #[test]
    fn test_published_parses_iso_dates() {
        let ok = post("a", "Design", false);
        assert_eq!(
            ok.published(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
        );

        let mut bad = post("b", "Design", false);
        bad.date = "spring 2024".to_string();
        assert_eq!(bad.published(), None);
    }

    #[test]
    fn test_categories_derived_when_missing() {
        let raw = r#"{
            "posts": [
                {
                    "id": "a", "slug": "a", "title": "A", "excerpt": "",
                    "category": "Design", "author": "x", "date": "2024-01-01",
                    "readTime": "3 min", "content": "", "featured": false
                },
                {
                    "id": "b", "slug": "b", "title": "B", "excerpt": "",
                    "category": "Craft", "author": "x", "date": "2024-01-02",
                    "readTime": "3 min", "content": "", "featured": false
                }
            ]
        }"#;

        let data = InsightsData::from_json(raw).unwrap();
        assert_eq!(data.categories, vec!["Design", "Craft"]);
    }
}
