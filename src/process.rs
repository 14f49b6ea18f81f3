use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Where the child's standard output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Shared with this process, so the user sees it live.
    Inherit,
    /// Collected and handed back to the caller.
    Capture,
}

/// A single blocking external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub stdout: Output,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdout: Output::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn capture_stdout(mut self) -> Self {
        self.stdout = Output::Capture;
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {}", describe_exit(.code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Runs external commands to completion.
///
/// Returns the captured standard output when the invocation asked for it.
/// Any nonzero exit is an error; there is no timeout.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<Option<String>, ProcessError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<Option<String>, ProcessError> {
        tracing::debug!("running {invocation}");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);

        let spawn_err = |source| ProcessError::Spawn {
            program: invocation.program_name(),
            source,
        };

        let (status, captured) = match invocation.stdout {
            Output::Inherit => (command.status().map_err(spawn_err)?, None),
            Output::Capture => {
                let output = command
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(spawn_err)?;
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                (output.status, Some(stdout))
            }
        };

        if status.success() {
            Ok(captured)
        } else {
            Err(ProcessError::Exit {
                program: invocation.program_name(),
                code: status.code(),
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let invocation = Invocation::new("nvim")
            .arg("-c")
            .arg("PlugUpgrade | PlugUpdate | qa");

        assert_eq!(invocation.to_string(), "nvim -c 'PlugUpgrade | PlugUpdate | qa'");
    }

    #[test]
    fn capture_switches_stdout_mode() {
        let invocation = Invocation::new("nvim").arg("--headless").capture_stdout();
        assert_eq!(invocation.stdout, Output::Capture);
        assert_eq!(Invocation::new("curl").stdout, Output::Inherit);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemRunner
            .run(&Invocation::new("nvim-jk-definitely-not-a-real-binary"))
            .unwrap_err();

        assert!(matches!(err, ProcessError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_reported_with_code() {
        let err = SystemRunner
            .run(&Invocation::new("sh").arg("-c").arg("exit 3"))
            .unwrap_err();

        assert!(matches!(err, ProcessError::Exit { code: Some(3), .. }));
        assert_eq!(err.to_string(), "sh exited with exit code 3");
    }

    #[cfg(unix)]
    #[test]
    fn captured_stdout_is_returned() {
        let out = SystemRunner
            .run(&Invocation::new("sh").arg("-c").arg("echo parsers").capture_stdout())
            .unwrap();

        assert_eq!(out.as_deref(), Some("parsers\n"));
    }
}
