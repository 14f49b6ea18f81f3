pub mod backup;
pub mod config_writer;
pub mod grammars;
pub mod installer;

pub use backup::backup_config;
pub use config_writer::{append_extension, sync_plugins, write_base};
pub use grammars::install_grammars;
pub use installer::install_plug;
