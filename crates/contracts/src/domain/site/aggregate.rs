use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Пункт основной навигации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// Ссылка на соцсеть (футер меню)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Конфигурация сайта: имя, контакты, навигация.
/// Читается из бандлированного JSON один раз при старте.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,

    #[serde(default)]
    pub socials: Vec<SocialLink>,

    #[serde(default)]
    pub nav: Vec<NavLink>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing site config JSON")
    }
}

/// Раздел юридического документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalSection {
    pub title: String,
    pub content: String,
}

/// Юридический документ (privacy / terms)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalDoc {
    pub title: String,

    #[serde(rename = "lastUpdated")]
    pub last_updated: String,

    #[serde(default)]
    pub sections: Vec<LegalSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalData {
    #[serde(default)]
    pub privacy: LegalDoc,

    #[serde(default)]
    pub terms: LegalDoc,
}

impl LegalData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing legal JSON")
    }
}

/// Клиент для страницы клиентов и бегущей строки на главной
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub name: String,
    pub sector: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientsData {
    #[serde(default)]
    pub clients: Vec<ClientEntry>,
}

impl ClientsData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing clients JSON")
    }

    /// Имена клиентов в авторском порядке (для бегущей строки)
    pub fn names(&self) -> Vec<String> {
        self.clients.iter().map(|c| c.name.clone()).collect()
    }
}
