//! Scenario Reporting
//!
//! Log summary per scenario and a JSON summary table per run.

use crate::error::Result;
use chrono::{DateTime, Utc};
use muse_welfare::WelfareReport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name of the summary table inside the output directory
pub const SUMMARY_FILE: &str = "simulation_summary_table.json";

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub converged: bool,
    pub iterations: usize,
    pub aggregate_effort: f64,
    pub mean_differentiation: f64,
    /// Creators whose differentiation search ended on the cap
    pub capped_agents: usize,
    #[serde(flatten)]
    pub welfare: WelfareReport,
}

/// Persisted summary of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scenarios: Vec<ScenarioOutcome>,
}

impl SummaryDocument {
    pub fn new(scenarios: Vec<ScenarioOutcome>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            scenarios,
        }
    }
}

/// Log the welfare components and market characteristics of a scenario
pub fn log_summary(report: &WelfareReport, scenario: &str) {
    let rule = "=".repeat(50);
    log::info!("{rule}");
    log::info!("RESULTS FOR SCENARIO: {scenario}");
    log::info!("{rule}");
    log::info!("--- Welfare Components ---");
    log::info!("  Creator Rent:            {:.4}", report.creator_rent);
    log::info!("  Platform Profit:         {:.4}", report.platform_profit);
    log::info!("  Consumer Surplus:        {:.4}", report.consumer_surplus);
    log::info!("  -----------------------------");
    log::info!("  Total Welfare:           {:.4}", report.total_welfare);
    log::info!("--- Market Characteristics ---");
    log::info!("  AI Adoption Rate:        {:.2}%", report.adoption_rate * 100.0);
    log::info!("  Gini Coefficient:        {:.4}", report.gini_coefficient);
    log::info!("  Average Effort:          {:.4}", report.average_effort);
    log::info!("  Average Differentiation: {:.4}", report.average_differentiation);
    log::info!("{rule}");
}

/// Write the summary table as pretty JSON under `dir`
///
/// Creates `dir` if needed. Returns `None` without touching the filesystem
/// when there is nothing to save.
pub fn save_summary(
    outcomes: &[ScenarioOutcome],
    dir: &Path,
    file: &str,
) -> Result<Option<PathBuf>> {
    if outcomes.is_empty() {
        log::warn!("No results to save");
        return Ok(None);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(file);
    let document = SummaryDocument::new(outcomes.to_vec());
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&path, json)?;

    log::info!("Results saved to {}", path.display());
    Ok(Some(path))
}
