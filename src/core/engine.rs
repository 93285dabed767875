use crate::core::scan::find_primes_in_range;
use crate::domain::model::{Range, ScanReport};
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use std::time::Instant;

/// 執行一次範圍掃描並計時
pub struct ScanEngine {
    range: Range,
    monitor: SystemMonitor,
}

impl ScanEngine {
    pub fn new(range: Range) -> Self {
        Self::new_with_monitoring(range, false)
    }

    pub fn new_with_monitoring(range: Range, monitor_enabled: bool) -> Self {
        Self {
            range,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn run(&self) -> ScanReport {
        tracing::info!("🔎 Scanning {} for primes", self.range);
        self.monitor.log_stats("Before scan");

        let started_at = Utc::now();
        let timer = Instant::now();
        let primes = find_primes_in_range(self.range);
        let elapsed = timer.elapsed();

        tracing::info!("✅ Found {} primes in {:?}", primes.len(), elapsed);
        if let (Some(first), Some(last)) = (primes.first(), primes.last()) {
            tracing::debug!("Smallest prime: {}, largest prime: {}", first, last);
        }
        self.monitor.log_final_stats();

        ScanReport {
            range: self.range,
            primes,
            elapsed,
            started_at,
        }
    }
}
