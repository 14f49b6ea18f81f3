use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};
use crate::model::init_lua::{BASE, EXTENSION};
use crate::model::layout::Layout;
use crate::process::{Invocation, ProcessRunner};

const PLUG_SYNC: &str = "PlugUpgrade | PlugUpdate | qa";

/// Create the config dir and write [`BASE`], truncating any previous init.lua.
pub fn write_base(layout: &Layout) -> Result<PathBuf> {
    let dir = layout.nvim_dir();
    fs::create_dir_all(&dir).map_err(BootstrapError::io("create", &dir))?;

    let path = layout.init_lua();
    fs::write(&path, BASE).map_err(BootstrapError::io("write", &path))?;
    tracing::info!("wrote configuration to {}", path.display());
    Ok(path)
}

/// Let the editor upgrade vim-plug and install the declared plugins.
pub fn sync_plugins(runner: &dyn ProcessRunner, editor: &str) -> Result<()> {
    let invocation = Invocation::new(editor).arg("-c").arg(PLUG_SYNC);
    runner
        .run(&invocation)
        .map_err(BootstrapError::PluginSync)?;
    Ok(())
}

/// Append [`EXTENSION`] to whatever init.lua holds now.
///
/// Assumes the editor run in [`sync_plugins`] did not rewrite the file.
pub fn append_extension(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(BootstrapError::io("open", path))?;
    file.write_all(EXTENSION.as_bytes())
        .map_err(BootstrapError::io("append to", path))?;
    tracing::info!("wrote extended configuration to {}", path.display());
    Ok(())
}
