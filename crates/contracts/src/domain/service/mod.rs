pub mod aggregate;

pub use aggregate::{Service, ServiceCaseStudy, ServiceFeature, ServicesData, Stat};
