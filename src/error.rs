use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::process::ProcessError;

/// Fatal bootstrap failures. Nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not install vim-plug into {}", path.display())]
    PlugInstall {
        path: PathBuf,
        #[source]
        source: ProcessError,
    },

    #[error("initial plugin installation failed")]
    PluginSync(#[source] ProcessError),

    #[error("initial language installations failed")]
    GrammarInstall(#[source] ProcessError),

    #[error("backup destination {} already exists", path.display())]
    BackupCollision { path: PathBuf },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BootstrapError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| BootstrapError::Io {
            action,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
