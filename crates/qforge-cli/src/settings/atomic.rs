use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{SettingsError, SettingsResult};

/// Writes `contents` to a staging file beside `path`, syncs it, then
/// renames it over `path`.
pub fn replace_file(path: &Path, contents: &[u8]) -> SettingsResult<()> {
    let staging = staging_path(path)?;
    let mut file = File::create(&staging)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    if let Err(err) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(err.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> SettingsResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| SettingsError::Invalid(format!("{} is not a file path", path.display())))?;
    Ok(path.with_file_name(format!(
        ".{}.{}.partial",
        name.to_string_lossy(),
        std::process::id()
    )))
}
