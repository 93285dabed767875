use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::time::Duration;

/// 閉區間 [start, end]。start > end 時視為空區間。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(1, 1_000_000)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// 遞增排列的質數序列，建立後不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeList(Vec<i64>);

impl PrimeList {
    pub(crate) fn from_sorted(primes: Vec<i64>) -> Self {
        Self(primes)
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl Deref for PrimeList {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    pub fn default_filename(&self) -> String {
        format!("primes.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub range: Range,
    pub primes: PrimeList,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    /// 經過秒數，四捨五入到小數第二位
    pub fn elapsed_seconds(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 100.0).round() / 100.0
    }

    pub fn summary(&self) -> Vec<String> {
        vec![
            format!(
                "Found {} primes between {} and {}",
                self.count(),
                self.range.start,
                self.range.end
            ),
            format!("Execution time: {:.2} seconds", self.elapsed_seconds()),
        ]
    }
}
