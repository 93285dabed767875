#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ProcessStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// 掃描期間的行程 CPU / 記憶體取樣
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: std::cell::RefCell<System>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: std::cell::Cell<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => Some(pid),
                Err(e) => {
                    tracing::warn!("⚠️ Process monitoring unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let mut system = System::new();
        if let Some(pid) = pid {
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::everything(),
            );
        }

        Self {
            system: std::cell::RefCell::new(system),
            pid,
            start_time: Instant::now(),
            peak_memory: std::cell::Cell::new(0),
            enabled: enabled && pid.is_some(),
        }
    }

    pub fn get_stats(&self) -> Option<ProcessStats> {
        if !self.enabled {
            return None;
        }
        let pid = self.pid?;

        let mut system = self.system.try_borrow_mut().ok()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::everything(),
        );

        let process = system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        // 更新峰值記憶體
        let peak = self.peak_memory.get().max(memory_mb);
        self.peak_memory.set(peak);

        Some(ProcessStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: peak,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 環境的空實現
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::default();
        assert!(!monitor.is_enabled());
        assert!(monitor.get_stats().is_none());
    }

    #[test]
    fn test_peak_memory_never_decreases() {
        let monitor = SystemMonitor::new(true);
        if let (Some(first), Some(second)) = (monitor.get_stats(), monitor.get_stats()) {
            assert!(second.peak_memory_mb >= first.peak_memory_mb);
            assert!(second.peak_memory_mb >= second.memory_usage_mb);
        }
    }
}
