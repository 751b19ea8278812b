use super::aggregate::Project;
use super::catalog::Catalog;
use super::selection::{CategoryFilter, Selection};

/// Класс размера карточки внутри текущей выборки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Normal,
    Large,
}

impl SizeClass {
    /// CSS-класс элемента сетки
    pub fn css_class(&self) -> &'static str {
        match self {
            SizeClass::Large => "grid-item-large",
            SizeClass::Normal => "grid-item",
        }
    }
}

/// Элемент выборки вместе с назначенным классом размера
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedProject<'a> {
    pub project: &'a Project,
    pub size: SizeClass,
}

/// Теги, реально встречающиеся в выбранной категории.
///
/// Для `All` возвращается готовый словарь каталога как есть; для
/// конкретной категории — объединение тегов её проектов в порядке первого
/// появления при проходе каталога. Результат всегда подмножество
/// `catalog.tags`; категория без проектов даёт пустой список.
pub fn resolve_tags(catalog: &Catalog, active_category: &CategoryFilter) -> Vec<String> {
    match active_category {
        CategoryFilter::All => catalog.tags.clone(),
        CategoryFilter::Category(_) => {
            let mut tags: Vec<String> = Vec::new();
            for project in &catalog.projects {
                if !active_category.matches(project.category.code()) {
                    continue;
                }
                for tag in &project.tags {
                    if !tags.iter().any(|t| t == tag) {
                        tags.push(tag.clone());
                    }
                }
            }
            tags
        }
    }
}

/// Отфильтровать каталог по текущему выбору, сохраняя порядок каталога.
///
/// Проект проходит, только если удовлетворяет обоим фасетам сразу.
/// Неизвестная категория или тег дают пустой результат, а не ошибку.
pub fn filter_projects<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<&'a Project> {
    catalog
        .projects
        .iter()
        .filter(|project| {
            let matches_category = selection.active_category.matches(project.category.code());
            let matches_tag = selection
                .active_tag
                .as_ref()
                .map_or(true, |tag| project.tags.contains(tag));
            matches_category && matches_tag
        })
        .collect()
}

/// Назначить классы размеров элементам выборки.
///
/// `Large` получают выделенные проекты и первый элемент выборки. Правило
/// пересчитывается на каждой смене фильтра: позиция считается в текущей
/// последовательности, а не в каталоге.
pub fn classify<'a>(filtered: &[&'a Project]) -> Vec<ClassifiedProject<'a>> {
    filtered
        .iter()
        .enumerate()
        .map(|(index, &project)| {
            let size = if project.featured || index == 0 {
                SizeClass::Large
            } else {
                SizeClass::Normal
            };
            ClassifiedProject { project, size }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::aggregate::{Category, ProjectCategory};

    fn project(
        id: &str,
        category: ProjectCategory,
        tags: &[&str],
        featured: bool,
    ) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            slug: id.to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: String::new(),
            hero_image: String::new(),
            description: String::new(),
            client: String::new(),
            year: "2024".to_string(),
            services: vec![],
            featured,
        }
    }

    // Пять проектов в трёх категориях; P1 выделен
    fn catalog() -> Catalog {
        let projects = vec![
            project("p1", ProjectCategory::Brand, &["video"], true),
            project("p2", ProjectCategory::Brand, &["social"], false),
            project("p3", ProjectCategory::Digital, &["web"], false),
            project("p4", ProjectCategory::Immersive, &["video", "install"], false),
            project("p5", ProjectCategory::Digital, &["web", "app"], false),
        ];
        let tags = crate::domain::project::catalog::collect_tags(&projects);
        Catalog {
            projects,
            categories: vec![
                Category {
                    id: "immersive".to_string(),
                    label: "Immersive".to_string(),
                },
                Category {
                    id: "brand".to_string(),
                    label: "Brand".to_string(),
                },
                Category {
                    id: "digital".to_string(),
                    label: "Digital".to_string(),
                },
            ],
            tags,
        }
    }

    fn selection(category: &str, tag: Option<&str>) -> Selection {
        Selection {
            active_category: CategoryFilter::from_code(category),
            active_tag: tag.map(|t| t.to_string()),
        }
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_identity_filter_returns_catalog_order() {
        let catalog = catalog();
        let result = filter_projects(&catalog, &selection("all", None));
        assert_eq!(ids(&result), vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_category_facet_narrows() {
        let catalog = catalog();
        let result = filter_projects(&catalog, &selection("brand", None));
        assert_eq!(ids(&result), vec!["p1", "p2"]);
        assert!(result
            .iter()
            .all(|p| p.category == ProjectCategory::Brand));
    }

    #[test]
    fn test_both_facets_are_conjunctive() {
        let catalog = catalog();
        assert_eq!(
            ids(&filter_projects(&catalog, &selection("brand", Some("video")))),
            vec!["p1"]
        );
        assert_eq!(
            ids(&filter_projects(&catalog, &selection("digital", Some("app")))),
            vec!["p5"]
        );
    }

    #[test]
    fn test_tag_narrows_category_result() {
        let catalog = catalog();
        let broad = filter_projects(&catalog, &selection("digital", None));
        let narrow = filter_projects(&catalog, &selection("digital", Some("web")));
        assert!(narrow.len() <= broad.len());
        for p in &narrow {
            assert!(broad.iter().any(|b| b.id == p.id));
        }
    }

    #[test]
    fn test_unknown_selection_yields_empty_not_error() {
        let catalog = catalog();
        assert!(filter_projects(&catalog, &selection("print", None)).is_empty());
        assert!(filter_projects(&catalog, &selection("all", Some("nope"))).is_empty());
    }

    #[test]
    fn test_empty_catalog_is_well_defined() {
        let empty = Catalog::default();
        assert!(filter_projects(&empty, &selection("all", None)).is_empty());
        assert!(resolve_tags(&empty, &CategoryFilter::All).is_empty());
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn test_filtering_is_pure() {
        let catalog = catalog();
        let sel = selection("digital", Some("web"));
        assert_eq!(
            ids(&filter_projects(&catalog, &sel)),
            ids(&filter_projects(&catalog, &sel))
        );
    }

    #[test]
    fn test_resolve_tags_all_returns_vocabulary_unchanged() {
        let catalog = catalog();
        assert_eq!(
            resolve_tags(&catalog, &CategoryFilter::All),
            catalog.tags
        );
    }

    #[test]
    fn test_resolve_tags_first_seen_within_category() {
        let catalog = catalog();
        // web появляется раньше (p3), app — только в p5
        assert_eq!(
            resolve_tags(&catalog, &CategoryFilter::from_code("digital")),
            vec!["web", "app"]
        );
        assert_eq!(
            resolve_tags(&catalog, &CategoryFilter::from_code("immersive")),
            vec!["video", "install"]
        );
    }

    #[test]
    fn test_resolve_tags_subset_law() {
        let catalog = catalog();
        for category in ["immersive", "brand", "digital", "print"] {
            for tag in resolve_tags(&catalog, &CategoryFilter::from_code(category)) {
                assert!(catalog.tags.contains(&tag), "{} not in vocabulary", tag);
            }
        }
    }

    #[test]
    fn test_resolve_tags_unknown_category_is_empty() {
        let catalog = catalog();
        assert!(resolve_tags(&catalog, &CategoryFilter::from_code("print")).is_empty());
    }

    #[test]
    fn test_classify_featured_and_first() {
        let catalog = catalog();
        let brand = filter_projects(&catalog, &selection("brand", None));

        // p1 выделен и первый, p2 обычный
        let classified = classify(&brand);
        assert_eq!(classified[0].size, SizeClass::Large);
        assert_eq!(classified[1].size, SizeClass::Normal);

        // в обратном порядке обе карточки крупные: p2 — как первая,
        // p1 — как выделенная
        let reversed: Vec<&Project> = brand.iter().rev().copied().collect();
        let classified = classify(&reversed);
        assert_eq!(classified[0].project.id, "p2");
        assert_eq!(classified[0].size, SizeClass::Large);
        assert_eq!(classified[1].project.id, "p1");
        assert_eq!(classified[1].size, SizeClass::Large);
    }

    #[test]
    fn test_classify_depends_on_position_in_current_view() {
        let catalog = catalog();

        let all = filter_projects(&catalog, &selection("all", None));
        let classified = classify(&all);
        // p3 не первый и не выделенный
        assert_eq!(classified[2].project.id, "p3");
        assert_eq!(classified[2].size, SizeClass::Normal);

        // под другим фильтром p3 оказывается первым и становится крупным
        let digital = filter_projects(&catalog, &selection("digital", None));
        let classified = classify(&digital);
        assert_eq!(classified[0].project.id, "p3");
        assert_eq!(classified[0].size, SizeClass::Large);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let catalog = catalog();
        let all = filter_projects(&catalog, &selection("all", None));
        let first: Vec<SizeClass> = classify(&all).iter().map(|c| c.size).collect();
        let second: Vec<SizeClass> = classify(&all).iter().map(|c| c.size).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_class_css() {
        assert_eq!(SizeClass::Large.css_class(), "grid-item-large");
        assert_eq!(SizeClass::Normal.css_class(), "grid-item");
    }
}
