mod bootstrap;
mod cli;
mod error;
mod logging;
mod model;
mod process;
mod steps;

use anyhow::Result;
use clap::Parser;

use bootstrap::Bootstrap;
use cli::Cli;
use model::layout::Layout;
use process::SystemRunner;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let layout = Layout::from_env()?;
    tracing::debug!(
        "config root {}, data home {}",
        layout.config_root.display(),
        layout.data_home.display()
    );

    let runner = SystemRunner;
    let mut bootstrap = Bootstrap::new(layout, &runner, cli.programs());
    let result = bootstrap.run();
    tracing::debug!("finished in state {:?}", bootstrap.state());

    Ok(result?)
}
