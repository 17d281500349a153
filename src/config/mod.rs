//! Configuration loading and management for the allowance engine.
//!
//! This module loads the allowance agreement from YAML files: metadata,
//! the station directory, and rank-keyed rate tables by effective date.
//!
//! # Example
//!
//! ```no_run
//! use allowance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cockpit_crew").unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementMetadata, AllowanceConfig, RateConfig, RateTable, StationDirectory, StationsConfig,
};
