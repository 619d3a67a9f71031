use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use plan2ics_core::PlanConfig;

pub fn run(explicit_path: Option<&Path>, init: bool) -> Result<()> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => PlanConfig::config_path()?,
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            PlanConfig::create_default_config(&path)?;
            println!("{}", format!("  Created {}", path.display()).green());
        }
        return Ok(());
    }

    let config = if path.exists() {
        PlanConfig::load_from(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
    } else {
        println!("{}", format!("# {} not found, using defaults", path.display()).dimmed());
        PlanConfig::default()
    };

    println!("{}", format!("# {}", path.display()).dimmed());
    print!("{}", config.to_toml()?);

    Ok(())
}
