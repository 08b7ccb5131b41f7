//! Command implementations for the IPL statistics CLI

pub mod common;
pub mod dashboard;
pub mod interactive;
pub mod summary;

use std::path::PathBuf;

use crate::{cli::InputArgs, data::DataPaths, DATA_DIR_ENV_VAR};

/// Resolve input file locations.
///
/// Explicit file flags win; otherwise the default file names are looked up
/// in `--data-dir`, then `IPL_STATS_DATA_DIR`, then the current directory.
pub fn resolve_data_paths(inputs: &InputArgs) -> DataPaths {
    let dir = inputs
        .data_dir
        .clone()
        .or_else(|| {
            std::env::var_os(DATA_DIR_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."));

    let defaults = DataPaths::in_dir(&dir);
    DataPaths {
        deliveries: inputs.deliveries.clone().unwrap_or(defaults.deliveries),
        matches: inputs.matches.clone().unwrap_or(defaults.matches),
    }
}
