//! Статический контент сайта.
//!
//! Весь контент авторится как JSON и вшивается в бандл на этапе сборки
//! (`include_str!`); парсится один раз при первом обращении. Ошибка
//! парсинга — это ошибка авторинга: логируем и отдаём пустую коллекцию,
//! сайт продолжает рендериться без упавшего раздела.

use contracts::domain::industry::IndustriesData;
use contracts::domain::insight::InsightsData;
use contracts::domain::project::Catalog;
use contracts::domain::service::ServicesData;
use contracts::domain::site::{ClientsData, LegalData, SiteConfig};
use once_cell::sync::Lazy;

fn parse_or_default<T: Default>(
    what: &str,
    parsed: anyhow::Result<T>,
) -> T {
    match parsed {
        Ok(value) => value,
        Err(err) => {
            log::error!("{what} failed to parse: {err:#}");
            T::default()
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    parse_or_default(
        "project catalog",
        Catalog::from_json(include_str!("../../data/projects.json")),
    )
});

static SERVICES: Lazy<ServicesData> = Lazy::new(|| {
    parse_or_default(
        "services",
        ServicesData::from_json(include_str!("../../data/services.json")),
    )
});

static INDUSTRIES: Lazy<IndustriesData> = Lazy::new(|| {
    parse_or_default(
        "industries",
        IndustriesData::from_json(include_str!("../../data/industries.json")),
    )
});

static INSIGHTS: Lazy<InsightsData> = Lazy::new(|| {
    parse_or_default(
        "insights",
        InsightsData::from_json(include_str!("../../data/insights.json")),
    )
});

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    parse_or_default(
        "site config",
        SiteConfig::from_json(include_str!("../../data/site.json")),
    )
});

static CLIENTS: Lazy<ClientsData> = Lazy::new(|| {
    parse_or_default(
        "clients",
        ClientsData::from_json(include_str!("../../data/clients.json")),
    )
});

static LEGAL: Lazy<LegalData> = Lazy::new(|| {
    parse_or_default(
        "legal",
        LegalData::from_json(include_str!("../../data/legal.json")),
    )
});

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

pub fn services() -> &'static ServicesData {
    &SERVICES
}

pub fn industries() -> &'static IndustriesData {
    &INDUSTRIES
}

pub fn insights() -> &'static InsightsData {
    &INSIGHTS
}

pub fn site() -> &'static SiteConfig {
    &SITE
}

pub fn clients() -> &'static ClientsData {
    &CLIENTS
}

pub fn legal() -> &'static LegalData {
    &LEGAL
}

#[cfg(test)]
mod tests {
    //! Авторский JSON проверяется здесь же: тесты гоняются нативно и
    //! ломаются при опечатке в контенте раньше, чем её увидит браузер.

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_parses_and_is_nonempty() {
        let catalog = catalog();
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.categories.is_empty());
        assert!(!catalog.tags.is_empty());
    }

    #[test]
    fn test_catalog_ids_and_slugs_are_unique() {
        let catalog = catalog();
        let ids: HashSet<&str> = catalog.projects.iter().map(|p| p.id.as_str()).collect();
        let slugs: HashSet<&str> = catalog.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(ids.len(), catalog.projects.len());
        assert_eq!(slugs.len(), catalog.projects.len());
    }

    #[test]
    fn test_catalog_vocabulary_covers_every_project_tag() {
        let catalog = catalog();
        for project in &catalog.projects {
            for tag in &project.tags {
                assert!(
                    catalog.tags.contains(tag),
                    "tag '{}' of '{}' missing from vocabulary",
                    tag,
                    project.id
                );
            }
        }
    }

    #[test]
    fn test_catalog_categories_match_enum_codes() {
        let catalog = catalog();
        for category in &catalog.categories {
            assert!(
                contracts::domain::project::ProjectCategory::from_code(&category.id).is_some(),
                "unknown category id '{}'",
                category.id
            );
        }
    }

    #[test]
    fn test_content_collections_parse() {
        assert!(!services().services.is_empty());
        assert!(!industries().industries.is_empty());
        assert!(!insights().posts.is_empty());
        assert!(!clients().clients.is_empty());
        assert!(!site().nav.is_empty());
        assert!(!legal().privacy.sections.is_empty());
        assert!(!legal().terms.sections.is_empty());
    }

    #[test]
    fn test_insight_dates_are_iso() {
        for post in &insights().posts {
            assert!(
                post.published().is_some(),
                "bad date '{}' in '{}'",
                post.date,
                post.id
            );
        }
    }
}
