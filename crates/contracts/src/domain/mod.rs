//! Доменные типы сайта: контент, поставляемый в виде статического JSON
//! на этапе сборки, и чистая логика фильтрации портфолио.

pub mod common;
pub mod industry;
pub mod insight;
pub mod project;
pub mod service;
pub mod site;
