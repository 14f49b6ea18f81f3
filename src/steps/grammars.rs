use crate::error::{BootstrapError, Result};
use crate::model::languages::install_command;
use crate::process::{Invocation, ProcessRunner};

/// Install all tree-sitter grammars in one headless editor session.
///
/// Compilation can take minutes; nothing bounds it.
pub fn install_grammars(runner: &dyn ProcessRunner, editor: &str) -> Result<()> {
    tracing::info!("installing language parsers, this may take a while ...");

    let invocation = Invocation::new(editor)
        .arg("--headless")
        .arg("-c")
        .arg(install_command())
        .capture_stdout();

    let output = runner
        .run(&invocation)
        .map_err(BootstrapError::GrammarInstall)?;

    if let Some(output) = output.filter(|o| !o.trim().is_empty()) {
        tracing::debug!("{editor} output:\n{output}");
    }
    Ok(())
}
