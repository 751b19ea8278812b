use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::aggregate::{Category, Project};
use crate::domain::common::find_by_slug;

/// Каталог портфолио: проекты плюс производные метаданные фасетов.
///
/// Каталог читается один раз при старте и дальше неизменяем — вся
/// фильтрация работает поверх ссылок на его содержимое.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub categories: Vec<Category>,

    /// Глобальный словарь тегов в порядке первого появления при авторинге
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Catalog {
    /// Разобрать каталог из авторского JSON.
    ///
    /// Если словарь тегов не задан, он выводится из проектов в порядке
    /// первого появления.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let mut catalog: Catalog =
            serde_json::from_str(raw).context("parsing project catalog JSON")?;
        if catalog.tags.is_empty() {
            catalog.tags = collect_tags(&catalog.projects);
        }
        Ok(catalog)
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        find_by_slug(&self.projects, slug)
    }

    /// Выделенные проекты в порядке каталога (подборка для главной)
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }
}

/// Словарь тегов по всем проектам, порядок — первое появление
pub fn collect_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for project in projects {
        for tag in &project.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::aggregate::ProjectCategory;

    fn project(id: &str, slug: &str, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            slug: slug.to_string(),
            category: ProjectCategory::Brand,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: String::new(),
            hero_image: String::new(),
            description: String::new(),
            client: String::new(),
            year: "2024".to_string(),
            services: vec![],
            featured: false,
        }
    }

    #[test]
    fn test_collect_tags_first_seen_order() {
        let projects = vec![
            project("p1", "one", &["video", "social"]),
            project("p2", "two", &["social", "web"]),
            project("p3", "three", &[]),
        ];

        assert_eq!(collect_tags(&projects), vec!["video", "social", "web"]);
    }

    #[test]
    fn test_from_json_derives_missing_vocabulary() {
        let raw = r#"{
            "projects": [
                {
                    "id": "p1",
                    "title": "One",
                    "slug": "one",
                    "category": "digital",
                    "tags": ["web", "app"],
                    "thumbnail": "",
                    "heroImage": "",
                    "description": "",
                    "client": "",
                    "year": "2024",
                    "services": [],
                    "featured": false
                }
            ],
            "categories": [{ "id": "digital", "label": "Digital" }]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.tags, vec!["web", "app"]);
    }

    #[test]
    fn test_from_json_keeps_authored_vocabulary() {
        let raw = r#"{
            "projects": [],
            "categories": [],
            "tags": ["install", "video"]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.tags, vec!["install", "video"]);
    }

    #[test]
    fn test_project_by_slug() {
        let catalog = Catalog {
            projects: vec![project("p1", "one", &[]), project("p2", "two", &[])],
            categories: vec![],
            tags: vec![],
        };

        assert_eq!(catalog.project_by_slug("two").map(|p| p.id.as_str()), Some("p2"));
        assert!(catalog.project_by_slug("missing").is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
