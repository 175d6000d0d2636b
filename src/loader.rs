//! CSV loading for the three launch sources.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use crate::error::{LaunchError, Result};
use crate::pipeline::types::{CompanyInfo, JointVentureRecord, SingleOwnerRecord};

/// Locations of the three input sheets.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub single_owner: PathBuf,
    pub joint_venture: PathBuf,
    pub companies: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            single_owner: PathBuf::from("datasets/SO-space.csv"),
            joint_venture: PathBuf::from("datasets/JV-space.csv"),
            companies: PathBuf::from("datasets/company_info.csv"),
        }
    }
}

/// The raw input tables, as read from disk.
#[derive(Debug, Clone, Default)]
pub struct LaunchTables {
    pub single_owner: Vec<SingleOwnerRecord>,
    pub joint_venture: Vec<JointVentureRecord>,
    pub companies: Vec<CompanyInfo>,
}

/// Deserializes every row of a headed CSV stream.
pub fn read_rows<T, R>(reader: R) -> std::result::Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: T = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// Reads a headed CSV file into typed rows.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| LaunchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_rows(file).map_err(|source| LaunchError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads all three sheets.
#[instrument(skip_all, fields(
    single_owner = %paths.single_owner.display(),
    joint_venture = %paths.joint_venture.display(),
    companies = %paths.companies.display()
))]
pub fn load_tables(paths: &InputPaths) -> Result<LaunchTables> {
    let tables = LaunchTables {
        single_owner: read_table(&paths.single_owner)?,
        joint_venture: read_table(&paths.joint_venture)?,
        companies: read_table(&paths.companies)?,
    };

    info!(
        single_owner = tables.single_owner.len(),
        joint_venture = tables.joint_venture.len(),
        companies = tables.companies.len(),
        "Loaded launch tables"
    );
    Ok(tables)
}
