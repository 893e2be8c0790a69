//! # relmeta Common Library
//!
//! Shared code for the relmeta crates:
//! - Error and result types
//! - TOML configuration loading and config file resolution
//! - Identity scorer weight constants

pub mod config;
pub mod error;

pub use config::{LoggingConfig, RankingConfig, ScoringWeights, TomlConfig};
pub use error::{Error, Result};
