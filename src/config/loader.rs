//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading allowance
//! configurations from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::Rank;

use super::types::{
    AgreementMetadata, AllowanceConfig, RateConfig, RateTable, StationDirectory, StationsConfig,
};

/// Loads and provides access to allowance configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query rate tables and stations.
///
/// # Directory Structure
///
/// ```text
/// config/cockpit_crew/
/// ├── agreement.yaml      # Agreement metadata
/// ├── stations.yaml       # International station codes
/// └── rates/
///     └── 2026-01-01.yaml # Rank rate tables effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use allowance_engine::config::ConfigLoader;
/// use allowance_engine::models::Rank;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/cockpit_crew").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let rates = loader.rate_table(Rank::Captain, date).unwrap();
/// println!("Tail swap: {}", rates.tail_swap_amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AllowanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or the rates directory holds no rate files.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<AgreementMetadata>(&path.join("agreement.yaml"))?;
        let stations = Self::load_yaml::<StationsConfig>(&path.join("stations.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        let config = AllowanceConfig::new(
            metadata,
            StationDirectory::new(stations.international),
            rates,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<RateConfig>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        self.config.agreement()
    }

    /// Returns the station directory.
    pub fn stations(&self) -> &StationDirectory {
        self.config.stations()
    }

    /// Gets the rate table for a rank on a given date.
    ///
    /// Uses the most recent rate file effective on or before `date`.
    pub fn rate_table(&self, rank: Rank, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .rates_effective_on(date)
            .and_then(|rc| rc.rates.get(&rank))
            .ok_or(EngineError::RateNotFound { rank, date })
    }

    /// Returns every rank's rate table in force on `date`, with the date the
    /// tables took effect.
    pub fn active_rates(
        &self,
        date: NaiveDate,
    ) -> EngineResult<(NaiveDate, BTreeMap<Rank, RateTable>)> {
        let rate_config =
            self.config
                .rates_effective_on(date)
                .ok_or(EngineError::RateNotFound {
                    rank: Rank::Captain,
                    date,
                })?;

        let tables = rate_config
            .rates
            .iter()
            .map(|(rank, table)| (*rank, table.clone()))
            .collect();

        Ok((rate_config.effective_date, tables))
    }
}
