use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Whitespace-only values count as missing.
pub fn validate_required_setting(field_name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EtlError::ConfigurationMissing {
            field: field_name.to_string(),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_stem(field_name: &str, path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path has no file name".to_string(),
        })
}

/// Checks that every required column appears in the CSV header.
pub fn validate_required_columns(path: &Path, headers: &[String], required: &[&str]) -> Result<()> {
    let present: HashSet<&str> = headers.iter().map(String::as_str).collect();

    match required.iter().find(|column| !present.contains(*column)) {
        Some(column) => Err(EtlError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
