//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, SeriesConfig, CONFIG_FILE_NAME, CONFIG_TEMPLATE};
pub use repository::FileSystemRepository;
