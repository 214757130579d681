use crate::utils::error::{ReportError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// An empty path is accepted here; opening it later reports the I/O error.
pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.contains('\0') {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: raw.replace('\0', "\\0"),
            reason: "Path contains null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_format(field_name: &str, format: &str, allowed_formats: &[&str]) -> Result<()> {
    if !allowed_formats.contains(&format) {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                allowed_formats.join(", ")
            ),
        });
    }
    Ok(())
}
