// Library exports for the desktop binary and tests

pub mod catalog;
pub mod config;
pub mod ui;

pub use catalog::{CatalogClient, CatalogError};
pub use config::{Config, ConfigError};

#[cfg(test)]
mod test_support;
