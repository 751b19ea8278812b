use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::common::{find_by_slug, Slugged};
use crate::domain::service::{ServiceCaseStudy, Stat};

/// Решение, которое агентство предлагает отрасли
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub title: String,
    pub description: String,
}

/// Отраслевая страница
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stats: Stat,

    #[serde(default)]
    pub solutions: Vec<Solution>,

    #[serde(rename = "caseStudies", default)]
    pub case_studies: Vec<ServiceCaseStudy>,

    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Slugged for Industry {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustriesData {
    #[serde(default)]
    pub industries: Vec<Industry>,
}

impl IndustriesData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing industries JSON")
    }

    pub fn industry_by_slug(&self, slug: &str) -> Option<&Industry> {
        find_by_slug(&self.industries, slug)
    }
}
