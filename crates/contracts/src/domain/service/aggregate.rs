use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::common::{find_by_slug, Slugged};

/// Пара значение/подпись для блока статистики
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Пункт "что входит в услугу"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFeature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Короткий кейс внутри страницы услуги
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCaseStudy {
    pub client: String,
    pub result: String,
    pub description: String,
}

/// Услуга агентства (страница-деталь + карточка в списке)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stats: Stat,

    #[serde(default)]
    pub features: Vec<ServiceFeature>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(rename = "caseStudy", default)]
    pub case_study: ServiceCaseStudy,

    #[serde(rename = "productList", default)]
    pub product_list: Option<Vec<String>>,
}

impl Slugged for Service {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicesData {
    #[serde(default)]
    pub services: Vec<Service>,
}

impl ServicesData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing services JSON")
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        find_by_slug(&self.services, slug)
    }
}
