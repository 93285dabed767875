use crate::domain::model::{OutputFormat, ScanReport};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, ScanError};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    start: i64,
    end: i64,
    count: usize,
    elapsed_seconds: f64,
    started_at: DateTime<Utc>,
    primes: &'a [i64],
}

/// 依格式輸出掃描結果
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => render_delimited(report, b','),
        OutputFormat::Tsv => render_delimited(report, b'\t'),
        OutputFormat::Json => {
            let json = JsonReport {
                start: report.range.start,
                end: report.range.end,
                count: report.count(),
                elapsed_seconds: report.elapsed_seconds(),
                started_at: report.started_at,
                primes: &report.primes,
            };
            Ok(serde_json::to_vec_pretty(&json)?)
        }
    }
}

fn render_delimited(report: &ScanReport, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["index", "prime"])?;
    for (index, prime) in report.primes.iter().enumerate() {
        writer.write_record([(index + 1).to_string(), prime.to_string()])?;
    }

    writer
        .into_inner()
        .map_err(|e| ScanError::IoError(e.into_error()))
}

/// 輸出並寫入儲存空間，回傳完整路徑
pub fn export<S: Storage>(
    storage: &S,
    report: &ScanReport,
    format: OutputFormat,
    filename: &str,
) -> Result<String> {
    let data = render(report, format)?;
    tracing::debug!("Rendered {} bytes of {} output", data.len(), format);
    let path = storage.write_file(filename, &data)?;
    tracing::info!("📁 Wrote {} primes to {}", report.count(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PrimeList, Range};
    use std::cell::RefCell;
    use std::time::Duration;

    fn sample_report() -> ScanReport {
        ScanReport {
            range: Range::new(10, 20),
            primes: PrimeList::from_sorted(vec![11, 13, 17, 19]),
            elapsed: Duration::from_millis(20),
            started_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Storage for MemoryStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            self.files
                .borrow_mut()
                .push((path.to_string(), data.to_vec()));
            Ok(format!("memory://{}", path))
        }
    }

    #[test]
    fn test_render_csv() {
        let data = render(&sample_report(), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text, "index,prime\n1,11\n2,13\n3,17\n4,19\n");
    }

    #[test]
    fn test_render_tsv() {
        let data = render(&sample_report(), OutputFormat::Tsv).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text.lines().next(), Some("index\tprime"));
        assert_eq!(text.lines().last(), Some("4\t19"));
    }

    #[test]
    fn test_render_json() {
        let data = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();

        assert_eq!(value["start"], 10);
        assert_eq!(value["end"], 20);
        assert_eq!(value["count"], 4);
        assert_eq!(value["elapsed_seconds"], 0.02);
        assert_eq!(value["primes"], serde_json::json!([11, 13, 17, 19]));
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_render_empty_report() {
        let mut report = sample_report();
        report.primes = PrimeList::default();

        let csv = render(&report, OutputFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap(), "index,prime\n");

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["primes"], serde_json::json!([]));
    }

    #[test]
    fn test_export_writes_through_storage() {
        let storage = MemoryStorage::default();
        let path = export(&storage, &sample_report(), OutputFormat::Csv, "primes.csv").unwrap();

        assert_eq!(path, "memory://primes.csv");
        let files = storage.files.borrow();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "primes.csv");
    }
}
