//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileApiConfig, FileCatalogConfig, FileConfig, FileUiConfig};
pub use loader::ConfigLoader;
