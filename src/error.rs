use std::path::PathBuf;

/// Errors produced by environment operations.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Environment {0} already exists.")]
    AlreadyExists(String),

    #[error("Environment {0} does not exist.")]
    NotFound(String),

    #[error("invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} exited with {status}: {stderr}")]
    CommandFailed {
        step: Step,
        status: String,
        stderr: String,
    },

    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EnvError {
    pub(crate) fn io(
        context: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

/// External command a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateVenv,
    Install,
    Freeze,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::CreateVenv => "venv",
            Step::Install => "pip install",
            Step::Freeze => "pip freeze",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
