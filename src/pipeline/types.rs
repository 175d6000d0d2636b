//! Data types used by the launch pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parser::lenient_amount;
use crate::pipeline::class::LaunchClass;

/// A row of the single-owner launch sheet (`SO-space.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct SingleOwnerRecord {
    #[serde(rename = "Company ID")]
    pub company_id: String,
    #[serde(rename = "Orbit Altitude")]
    pub orbit_altitude: Option<String>,
    #[serde(rename = "QA", deserialize_with = "lenient_amount")]
    pub qa: Option<f64>,
    #[serde(rename = "Payload (kg)", deserialize_with = "lenient_amount")]
    pub payload_kg: Option<f64>,
    #[serde(rename = "Price ($/kg)", deserialize_with = "lenient_amount")]
    pub price_per_kg: Option<f64>,
    #[serde(rename = "Launch Cost ($M)", deserialize_with = "lenient_amount")]
    pub launch_cost_millions: Option<f64>,
}

/// A row of the joint-venture launch sheet (`JV-space.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct JointVentureRecord {
    #[serde(rename = "Company ID")]
    pub company_id: String,
    #[serde(rename = "Orbit Altitude")]
    pub orbit_altitude: Option<String>,
    #[serde(rename = "QA", deserialize_with = "lenient_amount")]
    pub qa: Option<f64>,
    #[serde(rename = "Payload (tons)", deserialize_with = "lenient_amount")]
    pub payload_tons: Option<f64>,
    #[serde(rename = "Price ($/ton)", deserialize_with = "lenient_amount")]
    pub price_per_ton: Option<f64>,
    #[serde(rename = "Launch Cost", deserialize_with = "lenient_amount")]
    pub launch_cost: Option<f64>,
}

/// Static company metadata from `company_info.csv`. Other columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyInfo {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Tech Type")]
    pub tech_type: Option<String>,
}

/// Which sheet a launch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchSource {
    SingleOwner,
    JointVenture,
}

/// A launch in the unified schema: kilograms, currency per kilogram, currency.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub company_id: String,
    pub orbit_altitude: Option<String>,
    pub qa: Option<f64>,
    pub payload_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub launch_cost: Option<f64>,
    pub source: LaunchSource,
}

/// A qualifying launch joined with its company's country.
///
/// Orbit, QA and technology type are dropped once they have served the
/// filter and join.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub company_id: String,
    pub payload_kg: Option<f64>,
    pub price_per_kg: Option<f64>,
    pub launch_cost: Option<f64>,
    /// Lowercased and trimmed; the configured default when the join missed.
    pub country: String,
    pub source: LaunchSource,
}

/// A merged launch with its derived payload class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: MergedRecord,
    pub launch_class: Option<LaunchClass>,
}

/// Total qualifying launch spend of one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySpend {
    pub country: String,
    pub total_launch_cost: f64,
    pub launches: usize,
    pub eligible: bool,
}

/// Mean price per kilogram of one country within one launch class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAggregate {
    pub launch_class: LaunchClass,
    pub country: String,
    pub average_price: f64,
    pub launches: usize,
}

/// The cheapest eligible country of a launch class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Launch Class")]
    pub launch_class: LaunchClass,
    #[serde(rename = "Average Price")]
    pub average_price: f64,
    /// Title-cased for display.
    #[serde(rename = "Country")]
    pub country: String,
}

/// Final output of a run: one winner per class, in [`LaunchClass::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchReport {
    pub generated_at: DateTime<Utc>,
    pub rows: [ResultRow; 3],
}
