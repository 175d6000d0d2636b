//! Launch value pipeline.
//!
//! Each stage is a pure function over the previous stage's table:
//! normalize both launch sheets, stack and filter them, join company
//! countries, classify by payload, drop low-spend countries, average price
//! per class and country, and pick the cheapest country of each class.

pub mod aggregate;
pub mod class;
pub mod merge;
pub mod normalize;
pub mod select;
pub mod types;
pub mod utility;

use tracing::{info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::LaunchTables;
use aggregate::{aggregate_classes, classify, country_spend, eligible_countries, restrict_to_eligible};
use merge::{filter_qualifying, join_companies, stack};
use normalize::{normalize_joint_venture, normalize_single_owner};
use select::select_winners;
use types::{ClassifiedRecord, CountrySpend, LaunchReport};

/// Runs every stage up to classification: the qualifying launches, joined to
/// their country and tagged with a launch class.
#[instrument(skip_all)]
pub fn prepare(tables: &LaunchTables, config: &PipelineConfig) -> Vec<ClassifiedRecord> {
    let single_owner = normalize_single_owner(&tables.single_owner);
    let joint_venture = normalize_joint_venture(&tables.joint_venture);

    let combined = stack(&single_owner, &joint_venture);
    let qualifying = filter_qualifying(&combined, config);
    let merged = join_companies(&qualifying, &tables.companies, config);

    classify(&merged)
}

/// Total launch spend per country and whether it clears the threshold.
pub fn spend_report(tables: &LaunchTables, config: &PipelineConfig) -> Vec<CountrySpend> {
    let classified = prepare(tables, config);
    country_spend(&classified, config.spend_threshold)
}

/// Runs the whole pipeline and returns the cheapest eligible country of each
/// launch class.
///
/// # Errors
///
/// Returns [`crate::error::LaunchError::NoEligibleCountry`] when a class ends
/// up with no eligible, priced launch.
#[instrument(skip_all)]
pub fn run(tables: &LaunchTables, config: &PipelineConfig) -> Result<LaunchReport> {
    let classified = prepare(tables, config);

    let spend = country_spend(&classified, config.spend_threshold);
    let eligible = eligible_countries(&spend);
    let restricted = restrict_to_eligible(&classified, &eligible);

    let aggregates = aggregate_classes(&restricted);
    let report = select_winners(&aggregates)?;

    info!(rows = report.rows.len(), "Pipeline complete");
    Ok(report)
}
