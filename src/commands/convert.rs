use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use plan2ics_core::ics::plan_to_ics;
use plan2ics_core::{BookVocabulary, Plan, PlanConfig};
use tracing::info;

pub fn run(plan_path: &Path, output: Option<&Path>, config: &PlanConfig) -> Result<()> {
    let plan = Plan::load(plan_path, BookVocabulary::standard(), config.tokenize_mode())
        .with_context(|| format!("Failed to read plan {}", plan_path.display()))?;

    if plan.is_empty() {
        anyhow::bail!(
            "No day lines found in {}.\n\
            Day lines look like: Day 1 Genesis 1 2 Psalm 19",
            plan_path.display()
        );
    }

    let ics = plan_to_ics(&plan, config, Utc::now())?;

    match output {
        Some(path) => {
            std::fs::write(path, &ics)
                .with_context(|| format!("Failed to write calendar to {}", path.display()))?;
            info!(path = %path.display(), days = plan.len(), "wrote calendar");
            eprintln!(
                "{}",
                format!("  Wrote {} days to {}", plan.len(), path.display()).green()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(ics.as_bytes())
                .context("Failed to write calendar to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
