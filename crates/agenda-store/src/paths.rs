use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "agenda";
const DB_FILENAME: &str = "agenda.sqlite3";

/// Default database location under the XDG data dir, creating the
/// directory if needed.
pub fn db_path() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir.join(DB_FILENAME))
}

pub fn db_path_in(dir: &Path) -> PathBuf {
    dir.join(DB_FILENAME)
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let dir = PathBuf::from(dir);
        if dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(dir));
        }
        return Ok(dir.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}
