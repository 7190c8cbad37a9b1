use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{EnvError, Result, Step};

/// External tools an environment is built with.
///
/// The manager never implements virtual environments or package installs
/// itself; every such action goes through this trait.
pub trait Toolchain {
    /// Run `<python> -m venv <target>`.
    fn create_venv(&self, target: &Path) -> Result<()>;

    /// Run `<pip> install -r <requirements>`.
    fn install_requirements(&self, pip: &Path, requirements: &Path) -> Result<()>;

    /// Run `<pip> freeze`, streaming stdout into `destination`.
    fn freeze(&self, pip: &Path, destination: File) -> Result<()>;
}

/// Toolchain backed by real subprocesses.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    python: PathBuf,
}

impl SystemToolchain {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Toolchain for SystemToolchain {
    fn create_venv(&self, target: &Path) -> Result<()> {
        let mut command = Command::new(&self.python);
        command.arg("-m").arg("venv").arg(target);
        run(Step::CreateVenv, command)
    }

    fn install_requirements(&self, pip: &Path, requirements: &Path) -> Result<()> {
        let mut command = Command::new(pip);
        command.arg("install").arg("-r").arg(requirements);
        run(Step::Install, command)
    }

    fn freeze(&self, pip: &Path, destination: File) -> Result<()> {
        let mut command = Command::new(pip);
        command.arg("freeze").stdout(Stdio::from(destination));
        run(Step::Freeze, command)
    }
}

/// Run a command to completion, capturing stderr for the failure report.
///
/// No timeout is applied: a hung tool hangs the invocation.
fn run(step: Step, mut command: Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(step = %step, command = ?command, "Running external command");

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|source| EnvError::Spawn {
            program: program.clone(),
            source,
        })?;

    if output.status.success() {
        debug!(step = %step, "Command finished");
        return Ok(());
    }

    Err(EnvError::CommandFailed {
        step,
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
    })
}
