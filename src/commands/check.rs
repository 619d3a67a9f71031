use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use plan2ics_core::{BookVocabulary, Plan, PlanConfig};

use crate::render::{Render, render_period};

pub fn run(plan_path: &Path, config: &PlanConfig, json: bool) -> Result<()> {
    let plan = Plan::load(plan_path, BookVocabulary::standard(), config.tokenize_mode())
        .with_context(|| format!("Failed to read plan {}", plan_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let mut flagged = 0;
    let mut previous: Option<&str> = None;

    for day in &plan.days {
        // Heading whenever the plan enters a new period
        if !day.period.is_empty() && previous != Some(day.period.as_str()) {
            println!("\n{}", render_period(&day.period));
        }
        previous = Some(day.period.as_str());

        println!("{}", day.render());

        if day.readings.iter().any(|r| !r.has_book()) {
            flagged += 1;
        }
    }

    let totals = format!("{} days in {} periods", plan.len(), plan.periods().len());

    println!();
    if flagged > 0 {
        println!(
            "{}",
            format!(
                "{totals}, {flagged} with tokens before the first book (line numbers with --json)"
            )
            .yellow()
        );
    } else {
        println!("{}", format!("{totals}, all readings matched").green());
    }

    Ok(())
}
