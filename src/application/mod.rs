//! Application layer - Use cases and orchestration

pub mod fix_links;
pub mod generate_config;

pub use fix_links::{fix_links, FixLinksOptions, FixLinksReport};
pub use generate_config::{generate_config, GenerateConfigOptions};
