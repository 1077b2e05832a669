pub mod catalog;
pub mod config;
pub mod observability;
pub mod render;

pub use catalog::Catalog;
pub use config::Config;
