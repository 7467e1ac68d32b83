//! File helpers shared by the match store and the settings store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Errors raised while reading or writing a data file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    #[display("i/o error: {_0}")]
    Io(io::Error),
    #[display("invalid JSON: {_0}")]
    Json(serde_json::Error),
}

/// Reads `path`, returning `None` if the file does not exist.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Replaces `path` with `contents` by writing a sibling file and renaming it,
/// so an interrupted write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = tmp_path(path);
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
