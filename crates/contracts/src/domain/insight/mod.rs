pub mod aggregate;

pub use aggregate::{Insight, InsightsData, ALL_CATEGORY};
