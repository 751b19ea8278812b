pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod selection;

pub use aggregate::{Category, Project, ProjectCategory};
pub use catalog::Catalog;
pub use filter::{classify, filter_projects, resolve_tags, ClassifiedProject, SizeClass};
pub use selection::{CategoryFilter, Selection};
