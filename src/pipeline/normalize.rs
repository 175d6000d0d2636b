//! Unit reconciliation between the two launch sheets.
//!
//! Single-owner rows quote launch cost in millions; joint-venture rows quote
//! payload in metric tons and price per ton. Both come out in kilograms,
//! currency per kilogram and raw currency.

use tracing::{info, instrument};

use crate::pipeline::types::{JointVentureRecord, LaunchRecord, LaunchSource, SingleOwnerRecord};

const KG_PER_TON: f64 = 1_000.0;
const UNITS_PER_MILLION: f64 = 1_000_000.0;

pub fn tons_to_kg(tons: f64) -> f64 {
    tons * KG_PER_TON
}

pub fn kg_to_tons(kg: f64) -> f64 {
    kg / KG_PER_TON
}

pub fn per_ton_to_per_kg(price_per_ton: f64) -> f64 {
    price_per_ton / KG_PER_TON
}

pub fn per_kg_to_per_ton(price_per_kg: f64) -> f64 {
    price_per_kg * KG_PER_TON
}

pub fn millions_to_units(millions: f64) -> f64 {
    millions * UNITS_PER_MILLION
}

/// Converts single-owner rows to the unified schema.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn normalize_single_owner(rows: &[SingleOwnerRecord]) -> Vec<LaunchRecord> {
    let records: Vec<LaunchRecord> = rows
        .iter()
        .map(|row| LaunchRecord {
            company_id: row.company_id.trim().to_string(),
            orbit_altitude: row.orbit_altitude.clone(),
            qa: row.qa,
            payload_kg: row.payload_kg,
            price_per_kg: row.price_per_kg,
            launch_cost: row.launch_cost_millions.map(millions_to_units),
            source: LaunchSource::SingleOwner,
        })
        .collect();

    info!(records = records.len(), "Normalized single-owner launches");
    records
}

/// Converts joint-venture rows to the unified schema.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn normalize_joint_venture(rows: &[JointVentureRecord]) -> Vec<LaunchRecord> {
    let records: Vec<LaunchRecord> = rows
        .iter()
        .map(|row| LaunchRecord {
            company_id: row.company_id.trim().to_string(),
            orbit_altitude: row.orbit_altitude.clone(),
            qa: row.qa,
            payload_kg: row.payload_tons.map(tons_to_kg),
            price_per_kg: row.price_per_ton.map(per_ton_to_per_kg),
            launch_cost: row.launch_cost,
            source: LaunchSource::JointVenture,
        })
        .collect();

    info!(records = records.len(), "Normalized joint-venture launches");
    records
}
