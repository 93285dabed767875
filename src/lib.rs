pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    engine::ScanEngine, export::export, primality::is_prime, scan::find_primes_in_range,
};
pub use domain::model::{OutputFormat, PrimeList, Range, ScanReport};
pub use utils::error::{Result, ScanError};
