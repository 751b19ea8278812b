pub mod industry;
pub mod insight;
pub mod service;
pub mod work;
