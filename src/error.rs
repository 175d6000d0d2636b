//! Error taxonomy for the launch pipeline.
//!
//! Cell-level parse problems never show up here: they are absorbed into
//! missing values by [`crate::parser`]. Only whole-file failures and the final
//! selection step surface as errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::class::LaunchClass;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to read CSV '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no eligible country for the {0} launch class")]
    NoEligibleCountry(LaunchClass),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
