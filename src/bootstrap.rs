use std::path::PathBuf;

use chrono::Local;

use crate::error::Result;
use crate::model::layout::Layout;
use crate::process::ProcessRunner;
use crate::steps;

/// Stages of a run, executed strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Backup,
    InstallPlug,
    WriteBase,
    SyncPlugins,
    AppendExtension,
    InstallGrammars,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Backup,
        Step::InstallPlug,
        Step::WriteBase,
        Step::SyncPlugins,
        Step::AppendExtension,
        Step::InstallGrammars,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::Backup => "backup",
            Step::InstallPlug => "install vim-plug",
            Step::WriteBase => "write init.lua",
            Step::SyncPlugins => "install plugins",
            Step::AppendExtension => "extend init.lua",
            Step::InstallGrammars => "install grammars",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running(Step),
    Completed,
    /// Terminal; earlier steps are not undone.
    Failed(Step),
}

/// External programs the run shells out to.
#[derive(Debug, Clone)]
pub struct Programs {
    pub editor: String,
    pub fetcher: String,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            editor: "nvim".to_string(),
            fetcher: "curl".to_string(),
        }
    }
}

pub struct Bootstrap<'a> {
    layout: Layout,
    runner: &'a dyn ProcessRunner,
    programs: Programs,
    state: RunState,
    init_lua: Option<PathBuf>,
}

impl<'a> Bootstrap<'a> {
    pub fn new(layout: Layout, runner: &'a dyn ProcessRunner, programs: Programs) -> Self {
        Self {
            layout,
            runner,
            programs,
            state: RunState::NotStarted,
            init_lua: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run every step once. The first failure stops the run.
    pub fn run(&mut self) -> Result<()> {
        for step in Step::ALL {
            self.state = RunState::Running(step);
            tracing::debug!("step: {}", step.label());

            if let Err(err) = self.execute(step) {
                self.state = RunState::Failed(step);
                tracing::debug!("{} failed", step.label());
                return Err(err);
            }
        }

        self.state = RunState::Completed;
        tracing::info!("neovim configured, check it out via '{}'", self.programs.editor);
        Ok(())
    }

    fn execute(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Backup => {
                steps::backup_config(&self.layout, &Local::now())?;
            }
            Step::InstallPlug => {
                steps::install_plug(&self.layout, self.runner, &self.programs.fetcher)?;
            }
            Step::WriteBase => {
                self.init_lua = Some(steps::write_base(&self.layout)?);
            }
            Step::SyncPlugins => {
                steps::sync_plugins(self.runner, &self.programs.editor)?;
            }
            Step::AppendExtension => {
                let path = self
                    .init_lua
                    .clone()
                    .unwrap_or_else(|| self.layout.init_lua());
                steps::append_extension(&path)?;
            }
            Step::InstallGrammars => {
                steps::install_grammars(self.runner, &self.programs.editor)?;
            }
        }
        Ok(())
    }
}
