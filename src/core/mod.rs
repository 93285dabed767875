pub mod engine;
pub mod export;
pub mod primality;
pub mod scan;

pub use crate::domain::model::{OutputFormat, PrimeList, Range, ScanReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
