use crate::utils::error::{Result, ScanError};

/// 超過這個寬度的範圍會記一筆警告
pub const LARGE_SPAN_WARNING: u64 = 100_000_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    let valid_formats = ["csv", "tsv", "json"];
    if !valid_formats.contains(&format) {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                valid_formats.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScanError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 範圍顛倒不是錯誤 (掃描結果為空)，這裡只記錄提示
pub fn check_range_span(start: i64, end: i64) {
    if start > end {
        tracing::warn!(
            "⚠️ Range start {} is greater than end {}, the scan will be empty",
            start,
            end
        );
        return;
    }

    let span = (end as i128 - start as i128 + 1) as u128;
    if span > LARGE_SPAN_WARNING as u128 {
        tracing::warn!(
            "⚠️ Scanning {} integers, this may take a long time",
            span
        );
    }
}
