//! Resolved runtime settings.

use std::path::PathBuf;

use crate::storage::StorageError;

/// Where the program reads and writes its files, and whether to ask for a
/// login first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `data.json` and the credentials file.
    pub data_dir: PathBuf,
    /// Directory receiving export files.
    pub export_dir: PathBuf,
    /// Run the login/registration step before the menu.
    pub login: bool,
}

impl Config {
    /// Builds a config, falling back to the defaults for unset directories.
    ///
    /// Returns `StorageError::NoDataDir` if no data directory was given and the
    /// platform has none.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        export_dir: Option<PathBuf>,
        login: bool,
    ) -> Result<Self, StorageError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self {
            data_dir,
            export_dir: export_dir.unwrap_or_else(|| PathBuf::from(".")),
            login,
        })
    }
}

/// Returns `<XDG data dir>/roster`, e.g. `~/.local/share/roster`.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(data_dir.join("roster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directories_win() {
        let config = Config::resolve(
            Some(PathBuf::from("/srv/roster")),
            Some(PathBuf::from("/tmp/out")),
            false,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/roster"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert!(!config.login);
    }

    #[test]
    fn export_dir_defaults_to_current_directory() {
        let config = Config::resolve(Some(PathBuf::from("/srv/roster")), None, true).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.login);
    }

    #[test]
    fn default_data_dir_is_under_xdg_data_dir() {
        if let Some(base) = dirs::data_dir() {
            assert_eq!(default_data_dir().unwrap(), base.join("roster"));
        }
    }
}
