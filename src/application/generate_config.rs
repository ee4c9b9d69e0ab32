//! Generate-config use case

use crate::error::{DaylinkError, Result};
use crate::infrastructure::{Config, CONFIG_TEMPLATE};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct GenerateConfigOptions {
    /// Overwrite an existing file
    pub force: bool,
    /// Plain defaults without the explanatory comments
    pub minimal: bool,
}

/// Write the default configuration to `output`.
///
/// An existing file is only replaced when `force` is set.
pub fn generate_config(output: &Path, options: GenerateConfigOptions) -> Result<()> {
    if output.exists() && !options.force {
        return Err(DaylinkError::Config(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )));
    }

    let contents = if options.minimal {
        Config::default().to_toml()?
    } else {
        CONFIG_TEMPLATE.to_string()
    };

    fs::write(output, contents)?;
    Ok(())
}
