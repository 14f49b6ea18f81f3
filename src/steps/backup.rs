use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use ignore::WalkBuilder;

use crate::error::{BootstrapError, Result};
use crate::model::layout::Layout;

/// Move an existing nvim config into `<backup_root>/<timestamp>`.
///
/// Returns the backup location, or `None` when there was nothing to back up.
/// Two runs within the same second collide on the destination and fail.
pub fn backup_config<Tz>(layout: &Layout, now: &DateTime<Tz>) -> Result<Option<PathBuf>>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tracing::info!("making backup of current configuration ...");

    let nvim_dir = layout.nvim_dir();
    if !nvim_dir.exists() {
        tracing::warn!(
            "nvim configuration not found in {}, no backup made",
            nvim_dir.display()
        );
        return Ok(None);
    }

    let backup_dir = layout.backup_dir(now);
    if backup_dir.exists() {
        return Err(BootstrapError::BackupCollision { path: backup_dir });
    }

    copy_tree(&nvim_dir, &backup_dir)?;
    tracing::info!("saved backup of config in {}", backup_dir.display());

    fs::remove_dir_all(&nvim_dir).map_err(BootstrapError::io("remove", &nvim_dir))?;
    Ok(Some(backup_dir))
}

/// Recursive copy. Symlinks are followed, so their targets' contents are copied.
/// Sockets, fifos and device nodes are refused rather than read.
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let walker = WalkBuilder::new(src)
        .standard_filters(false)
        .follow_links(true)
        .build();

    for entry in walker {
        let entry = entry.map_err(|err| BootstrapError::Io {
            action: "walk",
            path: src.to_path_buf(),
            source: err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;

        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        match entry.file_type() {
            Some(t) if t.is_dir() => {
                fs::create_dir_all(&target).map_err(BootstrapError::io("create", &target))?;
            }
            Some(t) if t.is_file() => {
                fs::copy(entry.path(), &target)
                    .map_err(BootstrapError::io("copy", entry.path()))?;
            }
            _ => {
                return Err(BootstrapError::Io {
                    action: "copy special file",
                    path: entry.path().to_path_buf(),
                    source: std::io::Error::other("not a regular file or directory"),
                });
            }
        }
    }

    Ok(())
}
