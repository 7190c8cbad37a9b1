use std::path::{Path, PathBuf};

use crate::error::{EnvError, Result};

/// Interpreter scripts directory inside a venv
const SCRIPTS_DIR: &str = if cfg!(windows) { "Scripts" } else { "bin" };

/// Installer executable inside the scripts directory
const PIP_BINARY: &str = if cfg!(windows) { "pip.exe" } else { "pip" };

/// Manifest written at the top level of every environment
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Shell type for activation hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
}

impl Shell {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bash" | "sh" => Some(Shell::Bash),
            "zsh" => Some(Shell::Zsh),
            "fish" => Some(Shell::Fish),
            "powershell" | "pwsh" => Some(Shell::PowerShell),
            "cmd" => Some(Shell::Cmd),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
            Shell::Cmd => "cmd",
        }
    }

    /// Whether venv writes an activation script for this shell here.
    ///
    /// POSIX venvs have no `activate.bat`; Windows venvs have no
    /// `activate.fish`.
    pub fn is_supported(self) -> bool {
        match self {
            Shell::Cmd => cfg!(windows),
            Shell::Fish => !cfg!(windows),
            _ => true,
        }
    }
}

/// A named environment under the manager root.
///
/// Nothing here touches the filesystem except [`Environment::exists`]; the
/// directory is the only record of an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    path: PathBuf,
}

impl Environment {
    pub fn new(root: &Path, name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            path: root.join(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Only a directory counts; a stray file of the same name does not.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.path.join(SCRIPTS_DIR)
    }

    pub fn pip(&self) -> PathBuf {
        self.scripts_dir().join(PIP_BINARY)
    }

    pub fn manifest(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE)
    }

    /// Activation script for the given shell, or the platform default.
    pub fn activation_script(&self, shell: Option<Shell>) -> PathBuf {
        let script = match shell {
            None | Some(Shell::Bash) | Some(Shell::Zsh) => "activate",
            Some(Shell::Fish) => "activate.fish",
            Some(Shell::PowerShell) => "Activate.ps1",
            Some(Shell::Cmd) => "activate.bat",
        };
        self.scripts_dir().join(script)
    }

    /// Command the caller must run in their own shell.
    ///
    /// A child process cannot change its parent's environment, so this is
    /// only ever printed.
    pub fn activation_command(&self, shell: Option<Shell>) -> String {
        let script = self.activation_script(shell);
        match shell {
            Some(Shell::PowerShell) => format!("& \"{}\"", script.display()),
            Some(Shell::Cmd) => script.display().to_string(),
            _ => format!("source {}", script.display()),
        }
    }
}

/// Reject names that are not a single, ordinary path segment.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to a relative directory"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(EnvError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
