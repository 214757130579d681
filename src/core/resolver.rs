use crate::domain::model::InputFormat;
use crate::utils::error::{ReportError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// An opened input file and the format it will be decoded as.
/// The handle is closed when this value is dropped.
#[derive(Debug)]
pub struct ResolvedInput {
    pub path: PathBuf,
    pub file: File,
    pub format: InputFormat,
}

/// Opens `path` and picks its format.
///
/// The file is opened before the extension is looked at, so a missing file
/// with an unknown extension reports the open failure.
pub fn resolve_input(path: &Path, format_override: Option<InputFormat>) -> Result<ResolvedInput> {
    let file = File::open(path).map_err(|source| ReportError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let format = match format_override {
        Some(format) => {
            tracing::debug!("Using configured format: {}", format);
            format
        }
        None => file_extension(path).parse::<InputFormat>()?,
    };

    Ok(ResolvedInput {
        path: path.to_path_buf(),
        file,
        format,
    })
}

/// Text after the last `.` of the final path component, or `""` when there
/// is none. Case is preserved.
pub fn file_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default()
}
