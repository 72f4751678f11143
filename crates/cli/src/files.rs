//! Reading designs from disk and writing rendered output.

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use superellipse_core::Design;

/// Loads a [`Design`] from a JSON file.
///
/// Missing fields take their defaults. Returns `CliError::Io` if the file
/// cannot be read and `CliError::Input` if it is not a valid design.
pub fn read_design(path: &Path) -> Result<Design, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let design: Design = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid design {}: {e}", path.display())))?;
    log::debug!("loaded design from {}: {design:?}", path.display());
    Ok(design)
}

/// Resolves the output file: a directory receives `default_name` inside it.
pub fn resolve_output(path: &Path, default_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(default_name)
    } else {
        path.to_path_buf()
    }
}

/// Writes `contents` to `path` verbatim, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::Io(format!("cannot create {}: {e}", parent.display())))?;
    }
    fs::write(path, contents)
        .map_err(|e| CliError::Io(format!("cannot write {}: {e}", path.display())))?;
    log::info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
