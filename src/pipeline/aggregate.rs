use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, instrument};

use crate::pipeline::class::LaunchClass;
use crate::pipeline::types::{ClassifiedRecord, CountryAggregate, CountrySpend, MergedRecord};
use crate::pipeline::utility::mean;

/// Per-class aggregate tables, each sorted by ascending average price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassAggregates {
    pub light: Vec<CountryAggregate>,
    pub medium: Vec<CountryAggregate>,
    pub heavy: Vec<CountryAggregate>,
}

impl ClassAggregates {
    pub fn for_class(&self, class: LaunchClass) -> &[CountryAggregate] {
        match class {
            LaunchClass::Light => &self.light,
            LaunchClass::Medium => &self.medium,
            LaunchClass::Heavy => &self.heavy,
        }
    }
}

/// Tags every merged launch with its payload class.
pub fn classify(merged: &[MergedRecord]) -> Vec<ClassifiedRecord> {
    merged
        .iter()
        .map(|record| ClassifiedRecord {
            launch_class: record.payload_kg.and_then(LaunchClass::from_payload),
            record: record.clone(),
        })
        .collect()
}

/// Sums launch cost per country across every class, including launches
/// without a class. Missing costs are skipped. Sorted by country.
#[instrument(skip(records), fields(rows = records.len()))]
pub fn country_spend(records: &[ClassifiedRecord], threshold: f64) -> Vec<CountrySpend> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for classified in records {
        let entry = totals.entry(classified.record.country.as_str()).or_default();
        entry.0 += classified.record.launch_cost.unwrap_or(0.0);
        entry.1 += 1;
    }

    let spend: Vec<CountrySpend> = totals
        .into_iter()
        .map(|(country, (total_launch_cost, launches))| CountrySpend {
            country: country.to_string(),
            total_launch_cost,
            launches,
            eligible: total_launch_cost >= threshold,
        })
        .collect();

    info!(
        countries = spend.len(),
        eligible = spend.iter().filter(|s| s.eligible).count(),
        "Computed country launch spend"
    );
    spend
}

/// Names of the countries clearing the spend threshold.
pub fn eligible_countries(spend: &[CountrySpend]) -> BTreeSet<String> {
    spend
        .iter()
        .filter(|s| s.eligible)
        .map(|s| s.country.clone())
        .collect()
}

/// Keeps only launches from `eligible` countries.
pub fn restrict_to_eligible(
    records: &[ClassifiedRecord],
    eligible: &BTreeSet<String>,
) -> Vec<ClassifiedRecord> {
    let kept: Vec<ClassifiedRecord> = records
        .iter()
        .filter(|r| eligible.contains(&r.record.country))
        .cloned()
        .collect();

    info!(
        before = records.len(),
        after = kept.len(),
        "Restricted launches to eligible countries"
    );
    kept
}

/// Mean price per kilogram per country for one class, cheapest first.
///
/// Countries with no priced launch in the class produce no row. Equal prices
/// are ordered by country name.
pub fn class_aggregates(records: &[ClassifiedRecord], class: LaunchClass) -> Vec<CountryAggregate> {
    let mut prices: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for classified in records.iter().filter(|r| r.launch_class == Some(class)) {
        let record = &classified.record;
        if let Some(price) = record.price_per_kg {
            prices.entry(record.country.as_str()).or_default().push(price);
        }
    }

    let mut aggregates: Vec<CountryAggregate> = prices
        .into_iter()
        .filter_map(|(country, series)| {
            Some(CountryAggregate {
                launch_class: class,
                country: country.to_string(),
                average_price: mean(&series)?,
                launches: series.len(),
            })
        })
        .collect();

    aggregates.sort_by(|a, b| {
        a.average_price
            .total_cmp(&b.average_price)
            .then_with(|| a.country.cmp(&b.country))
    });

    debug!(class = %class, rows = aggregates.len(), "Aggregated class prices");
    aggregates
}

/// Builds the sorted aggregate table of every class.
#[instrument(skip_all, fields(rows = records.len()))]
pub fn aggregate_classes(records: &[ClassifiedRecord]) -> ClassAggregates {
    ClassAggregates {
        light: class_aggregates(records, LaunchClass::Light),
        medium: class_aggregates(records, LaunchClass::Medium),
        heavy: class_aggregates(records, LaunchClass::Heavy),
    }
}
