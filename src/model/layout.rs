use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use chrono::{DateTime, TimeZone};

pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";
pub const DATA_HOME_VAR: &str = "XDG_DATA_HOME";

/// Timestamp format of backup directories, second precision.
pub const BACKUP_STAMP: &str = "%Y-%m-%d_%H:%M:%S";

/// Directory layout the bootstrap reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config_root: PathBuf,
    pub data_home: PathBuf,
}

impl Layout {
    /// Resolve both roots from the XDG variables, falling back to `$HOME`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            resolve(CONFIG_HOME_VAR, || Ok(home()?.join(".config")))?,
            resolve(DATA_HOME_VAR, || Ok(home()?.join(".local").join("share")))?,
        ))
    }

    pub fn new(config_root: impl Into<PathBuf>, data_home: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            data_home: data_home.into(),
        }
    }

    pub fn nvim_dir(&self) -> PathBuf {
        self.config_root.join("nvim")
    }

    pub fn init_lua(&self) -> PathBuf {
        self.nvim_dir().join("init.lua")
    }

    pub fn backup_root(&self) -> PathBuf {
        self.config_root.join("nvim-jk")
    }

    pub fn backup_dir<Tz>(&self, at: &DateTime<Tz>) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.backup_root().join(at.format(BACKUP_STAMP).to_string())
    }

    pub fn plug_path(&self) -> PathBuf {
        self.data_home
            .join("nvim")
            .join("site")
            .join("autoload")
            .join("plug.vim")
    }
}

/// Read `var` once; warn and use `fallback` when it is unset or empty.
///
/// `fallback` only runs when it is needed.
pub fn resolve(var: &str, fallback: impl FnOnce() -> Result<PathBuf>) -> Result<PathBuf> {
    let value = env::var_os(var).filter(|v| !v.is_empty());
    let unset = value.is_none();

    let path = resolve_var(value, fallback)?;
    if unset {
        tracing::warn!("{var} is not set, assuming {}", path.display());
    }
    Ok(path)
}

/// Pure half of [`resolve`]: pick the value or the fallback, then make it absolute.
pub fn resolve_var(
    value: Option<OsString>,
    fallback: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    let path = match value.filter(|v| !v.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => fallback()?,
    };
    Ok(absolute(&path))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn home() -> Result<PathBuf> {
    dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::logs_of;
    use chrono::NaiveDate;

    #[test]
    fn set_variable_wins_over_fallback() {
        let path = resolve_var(Some("/srv/cfg".into()), || Ok(PathBuf::from("/home/u/.config")));
        assert_eq!(path.unwrap(), PathBuf::from("/srv/cfg"));
    }

    #[test]
    fn set_variable_never_looks_up_home() {
        let path = resolve_var(Some("/srv/cfg".into()), || {
            Err(anyhow!("cannot determine home directory"))
        });
        assert_eq!(path.unwrap(), PathBuf::from("/srv/cfg"));
    }

    #[test]
    fn unset_or_empty_variable_uses_fallback() {
        let fallback = || Ok(PathBuf::from("/home/u/.config"));
        assert_eq!(
            resolve_var(None, fallback).unwrap(),
            PathBuf::from("/home/u/.config")
        );
        assert_eq!(
            resolve_var(Some(OsString::new()), fallback).unwrap(),
            PathBuf::from("/home/u/.config")
        );
    }

    #[test]
    fn missing_home_fails_only_when_needed() {
        let err = resolve_var(None, || Err(anyhow!("cannot determine home directory")));
        assert!(err.is_err());
    }

    #[test]
    fn unset_variable_warns_with_the_assumed_path() {
        let (path, logs) = logs_of(|| {
            resolve("NVIM_JK_UNSET_CONFIG_ROOT_0f3c9a", || {
                Ok(PathBuf::from("/home/u/.config"))
            })
        });

        assert_eq!(path.unwrap(), PathBuf::from("/home/u/.config"));
        assert!(logs.lines().any(|l| {
            l.contains("WARN")
                && l.contains("NVIM_JK_UNSET_CONFIG_ROOT_0f3c9a is not set, assuming /home/u/.config")
        }));
    }

    #[test]
    fn relative_values_are_made_absolute() {
        let path = resolve_var(Some("cfg".into()), || Ok(PathBuf::new())).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("cfg"));
    }

    #[test]
    fn derived_paths() {
        let layout = Layout::new("/c", "/d");
        assert_eq!(layout.nvim_dir(), PathBuf::from("/c/nvim"));
        assert_eq!(layout.init_lua(), PathBuf::from("/c/nvim/init.lua"));
        assert_eq!(layout.backup_root(), PathBuf::from("/c/nvim-jk"));
        assert_eq!(
            layout.plug_path(),
            PathBuf::from("/d/nvim/site/autoload/plug.vim")
        );
    }

    #[test]
    fn backup_dir_is_stamped_to_the_second() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 42))
            .unwrap()
            .and_utc();
        let layout = Layout::new("/c", "/d");

        assert_eq!(
            layout.backup_dir(&at),
            PathBuf::from("/c/nvim-jk/2024-03-09_07:05:42")
        );
    }
}
