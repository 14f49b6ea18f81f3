use crate::error::{BootstrapError, Result};
use crate::model::init_lua::PLUG_URL;
use crate::model::layout::Layout;
use crate::process::{Invocation, ProcessRunner};

/// Result of the vim-plug installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

/// Download vim-plug with `fetcher` (curl-compatible) unless it is already present.
pub fn install_plug(
    layout: &Layout,
    runner: &dyn ProcessRunner,
    fetcher: &str,
) -> Result<InstallOutcome> {
    tracing::info!("installing vim-plug ...");

    let dst = layout.plug_path();
    if dst.exists() {
        tracing::info!("vim-plug is already installed in {}, skipping", dst.display());
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    let invocation = Invocation::new(fetcher)
        .arg("-fLo")
        .arg(&dst)
        .arg("--create-dirs")
        .arg(PLUG_URL);

    runner
        .run(&invocation)
        .map_err(|source| BootstrapError::PlugInstall {
            path: dst.clone(),
            source,
        })?;

    tracing::info!("installed vim-plug in {}!", dst.display());
    Ok(InstallOutcome::Installed)
}
