// Configuration module - grid sizing plus the application-level settings
pub mod grid_config;

pub use grid_config::GridConfig;
