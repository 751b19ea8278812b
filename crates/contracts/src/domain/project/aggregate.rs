use serde::{Deserialize, Serialize};

use crate::domain::common::Slugged;

// ============================================================================
// Category
// ============================================================================

/// Категории проектов — закрытый набор, задаётся при авторинге контента.
/// У каждого проекта ровно одна категория.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Immersive,
    Brand,
    Digital,
}

impl ProjectCategory {
    /// Получить код категории (совпадает с `Category::id` в каталоге)
    pub fn code(&self) -> &'static str {
        match self {
            ProjectCategory::Immersive => "immersive",
            ProjectCategory::Brand => "brand",
            ProjectCategory::Digital => "digital",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<ProjectCategory> {
        vec![
            ProjectCategory::Immersive,
            ProjectCategory::Brand,
            ProjectCategory::Digital,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "immersive" => Some(ProjectCategory::Immersive),
            "brand" => Some(ProjectCategory::Brand),
            "digital" => Some(ProjectCategory::Digital),
            _ => None,
        }
    }
}

/// Строка фасета категорий для UI. `id` совпадает с кодом
/// `ProjectCategory`; псевдокатегория "all" в список никогда не входит —
/// её рисует сам контрол фильтра.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

// ============================================================================
// Project
// ============================================================================

/// Проект портфолио. Неизменяемая запись, авторится вместе с каталогом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Стабильный уникальный идентификатор, ключ карточки в сетке
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: ProjectCategory,

    /// Свободные теги в порядке авторинга; может быть пусто
    #[serde(default)]
    pub tags: Vec<String>,

    pub thumbnail: String,

    #[serde(rename = "heroImage")]
    pub hero_image: String,

    pub description: String,
    pub client: String,
    pub year: String,

    /// Описательный список услуг; фильтрацией не используется
    #[serde(default)]
    pub services: Vec<String>,

    /// Флаг выделенной карточки, задаётся при авторинге
    #[serde(default)]
    pub featured: bool,
}

impl Slugged for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
}
