use serde::{Deserialize, Serialize};

/// Фасет категории: весь каталог или одна категория по её коду.
///
/// Код хранится строкой: неизвестное значение — это валидный фильтр,
/// который просто ничему не соответствует.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Совпадает ли фасет с кодом категории проекта
    pub fn matches(&self, category_code: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => id == category_code,
        }
    }

    /// Парсинг из кода; "all" зарезервирован под отсутствие фильтра
    pub fn from_code(code: &str) -> Self {
        if code == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(id) => id,
        }
    }
}

/// Двухфасетное состояние выбора фильтра работ.
///
/// Инвариант: смена категории всегда сбрасывает тег в той же самой
/// операции — набор тегов новой категории может не содержать прежний тег.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub active_category: CategoryFilter,
    pub active_tag: Option<String>,
}

impl Selection {
    /// Начальное состояние: без фильтров
    pub fn new() -> Self {
        Self::default()
    }

    /// Единственный способ сменить категорию; тег сбрасывается безусловно
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
        self.active_tag = None;
    }

    /// Выбрать тег (`None` снимает выбор); категория не меняется.
    /// Повторный выбор того же значения — no-op по содержимому состояния.
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.active_tag = tag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let selection = Selection::new();
        assert_eq!(selection.active_category, CategoryFilter::All);
        assert_eq!(selection.active_tag, None);
    }

    #[test]
    fn test_category_switch_resets_tag() {
        let mut selection = Selection::new();
        selection.select_category(CategoryFilter::from_code("brand"));
        selection.select_tag(Some("video".to_string()));
        assert_eq!(selection.active_tag.as_deref(), Some("video"));

        selection.select_category(CategoryFilter::from_code("digital"));
        assert_eq!(
            selection.active_category,
            CategoryFilter::Category("digital".to_string())
        );
        assert_eq!(selection.active_tag, None);

        // сброс происходит и при повторном выборе той же категории
        selection.select_tag(Some("web".to_string()));
        selection.select_category(CategoryFilter::from_code("digital"));
        assert_eq!(selection.active_tag, None);
    }

    #[test]
    fn test_select_tag_keeps_category() {
        let mut selection = Selection::new();
        selection.select_category(CategoryFilter::from_code("immersive"));
        selection.select_tag(Some("install".to_string()));
        assert_eq!(
            selection.active_category,
            CategoryFilter::Category("immersive".to_string())
        );
    }

    #[test]
    fn test_reapplying_same_tag_is_idempotent() {
        let mut selection = Selection::new();
        selection.select_tag(Some("video".to_string()));
        let before = selection.clone();
        selection.select_tag(Some("video".to_string()));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_from_code_round_trip() {
        assert_eq!(CategoryFilter::from_code("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_code("brand").code(), "brand");
        assert_eq!(CategoryFilter::All.code(), "all");
    }
}
