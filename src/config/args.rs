use crate::core::{ConfigProvider, OutputFormat, Range};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prime-scan")]
#[command(about = "Find every prime in an integer range and time the scan")]
pub struct CliConfig {
    /// First integer of the range (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// Last integer of the range (inclusive)
    #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
    pub end: i64,

    /// Directory to write the prime list into
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        validation::check_range_span(self.start, self.end);
        Ok(())
    }
}
