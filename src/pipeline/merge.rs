//! Stacking, filtering and joining of normalized launches.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::config::PipelineConfig;
use crate::pipeline::types::{CompanyInfo, LaunchRecord, MergedRecord};

/// Unions the two normalized sheets, single-owner rows first.
pub fn stack(single_owner: &[LaunchRecord], joint_venture: &[LaunchRecord]) -> Vec<LaunchRecord> {
    single_owner.iter().chain(joint_venture).cloned().collect()
}

/// Whether a launch targets the configured orbit with a QA rating above the floor.
///
/// A missing QA rating never qualifies.
pub fn qualifies(record: &LaunchRecord, config: &PipelineConfig) -> bool {
    let on_target = record.orbit_altitude.as_deref() == Some(config.target_orbit.as_str());
    let rated = record.qa.is_some_and(|qa| qa > config.min_qa);
    on_target && rated
}

#[instrument(skip_all, fields(rows = combined.len(), orbit = %config.target_orbit))]
pub fn filter_qualifying(combined: &[LaunchRecord], config: &PipelineConfig) -> Vec<LaunchRecord> {
    let kept: Vec<LaunchRecord> = combined
        .iter()
        .filter(|r| qualifies(r, config))
        .cloned()
        .collect();

    info!(
        combined = combined.len(),
        qualifying = kept.len(),
        "Filtered launches by orbit and QA"
    );
    kept
}

/// Lowercases and trims a country name; blank names count as missing.
pub fn normalize_country(raw: &str) -> Option<String> {
    let country = raw.trim().to_lowercase();
    if country.is_empty() { None } else { Some(country) }
}

/// Builds the company lookup. The first row wins when an ID repeats, so the
/// join never duplicates a launch.
pub fn index_companies(companies: &[CompanyInfo]) -> HashMap<&str, &CompanyInfo> {
    let mut index = HashMap::with_capacity(companies.len());
    for company in companies {
        let id = company.id.trim();
        if index.contains_key(id) {
            warn!(company_id = id, "Duplicate company ID in company info, keeping first");
            continue;
        }
        index.insert(id, company);
    }
    index
}

/// Left-joins qualifying launches to company info.
///
/// Every launch is kept. Launches whose company is unknown, or whose company
/// has no country, get the configured default country.
#[instrument(skip_all, fields(rows = launches.len(), companies = companies.len()))]
pub fn join_companies(
    launches: &[LaunchRecord],
    companies: &[CompanyInfo],
    config: &PipelineConfig,
) -> Vec<MergedRecord> {
    let index = index_companies(companies);
    let default_country = config.normalized_default_country();
    let mut unmatched = 0usize;
    let mut defaulted = 0usize;

    let merged: Vec<MergedRecord> = launches
        .iter()
        .map(|launch| {
            let company = index.get(launch.company_id.as_str());
            if company.is_none() {
                unmatched += 1;
                debug!(company_id = %launch.company_id, "Launch has no matching company");
            }

            let country = company
                .and_then(|c| c.country.as_deref())
                .and_then(normalize_country)
                .unwrap_or_else(|| {
                    defaulted += 1;
                    default_country.clone()
                });

            MergedRecord {
                company_id: launch.company_id.clone(),
                payload_kg: launch.payload_kg,
                price_per_kg: launch.price_per_kg,
                launch_cost: launch.launch_cost,
                country,
                source: launch.source,
            }
        })
        .collect();

    if defaulted > 0 {
        warn!(
            unmatched,
            defaulted,
            default_country = %default_country,
            "Launches without a country were assigned the default"
        );
    }
    info!(merged = merged.len(), "Joined launches to company info");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::LaunchSource;

    fn launch(company_id: &str, orbit: &str, qa: Option<f64>) -> LaunchRecord {
        LaunchRecord {
            company_id: company_id.to_string(),
            orbit_altitude: Some(orbit.to_string()),
            qa,
            payload_kg: Some(500.0),
            price_per_kg: Some(100.0),
            launch_cost: Some(1_000_000.0),
            source: LaunchSource::SingleOwner,
        }
    }

    fn company(id: &str, country: Option<&str>) -> CompanyInfo {
        CompanyInfo {
            id: id.to_string(),
            country: country.map(str::to_string),
            tech_type: Some("Rocket".to_string()),
        }
    }

    #[test]
    fn test_stack_keeps_both_sources_in_order() {
        let a = vec![launch("1", "LEO", Some(3.0))];
        let mut b_row = launch("2", "LEO", Some(3.0));
        b_row.source = LaunchSource::JointVenture;
        let combined = stack(&a, &[b_row]);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].company_id, "1");
        assert_eq!(combined[1].source, LaunchSource::JointVenture);
    }

    #[test]
    fn test_qa_must_exceed_floor() {
        let config = PipelineConfig::default();
        assert!(!qualifies(&launch("1", "LEO", Some(2.0)), &config));
        assert!(qualifies(&launch("1", "LEO", Some(2.01)), &config));
        assert!(!qualifies(&launch("1", "LEO", None), &config));
    }

    #[test]
    fn test_orbit_must_match_exactly() {
        let config = PipelineConfig::default();
        assert!(!qualifies(&launch("1", "GEO", Some(5.0)), &config));
        assert!(!qualifies(&launch("1", "leo", Some(5.0)), &config));

        let mut no_orbit = launch("1", "LEO", Some(5.0));
        no_orbit.orbit_altitude = None;
        assert!(!qualifies(&no_orbit, &config));
    }

    #[test]
    fn test_filter_qualifying() {
        let config = PipelineConfig::default();
        let rows = vec![
            launch("1", "LEO", Some(3.0)),
            launch("2", "MEO", Some(3.0)),
            launch("3", "LEO", Some(1.0)),
        ];
        let kept = filter_qualifying(&rows, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].company_id, "1");
    }

    #[test]
    fn test_join_normalizes_country() {
        let config = PipelineConfig::default();
        let merged = join_companies(
            &[launch("1", "LEO", Some(3.0))],
            &[company("1", Some("  Japan "))],
            &config,
        );
        assert_eq!(merged[0].country, "japan");
    }

    #[test]
    fn test_join_miss_gets_default_country() {
        let config = PipelineConfig::default();
        let merged = join_companies(
            &[launch("404", "LEO", Some(3.0)), launch("1", "LEO", Some(3.0))],
            &[company("1", None)],
            &config,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].country, "usa");
        assert_eq!(merged[1].country, "usa");
    }

    #[test]
    fn test_join_uses_configured_default() {
        let config = PipelineConfig {
            default_country: "Unknown".to_string(),
            ..PipelineConfig::default()
        };
        let merged = join_companies(&[launch("404", "LEO", Some(3.0))], &[], &config);
        assert_eq!(merged[0].country, "unknown");
    }

    #[test]
    fn test_duplicate_company_does_not_duplicate_launch() {
        let config = PipelineConfig::default();
        let merged = join_companies(
            &[launch("1", "LEO", Some(3.0))],
            &[company("1", Some("India")), company("1", Some("Brazil"))],
            &config,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].country, "india");
    }
}
