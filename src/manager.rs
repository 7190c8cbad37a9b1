use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::environment::{Environment, Shell};
use crate::error::{EnvError, Result};
use crate::toolchain::{SystemToolchain, Toolchain};

/// Default root directory, relative to the working directory
pub const DEFAULT_ROOT: &str = ".venvmanager";

/// Result of a successful `create`.
#[derive(Debug)]
pub struct Created {
    pub environment: Environment,
    /// Manifest the frozen package list was written back to
    pub manifest: PathBuf,
    /// True when no requirements file was supplied and an empty one was made
    pub generated_manifest: bool,
    /// Outcome of the final freeze into `manifest`
    pub exported: Result<()>,
}

/// Environment manager - owns the root directory of named environments
///
/// Every environment is an immediate subdirectory of `root`. There is no index
/// or lock: directory existence is the only state, so concurrent invocations
/// against the same root are not coordinated.
#[derive(Debug)]
pub struct EnvManager<T: Toolchain = SystemToolchain> {
    root: PathBuf,
    toolchain: T,
}

impl EnvManager<SystemToolchain> {
    /// Create a manager that shells out to `python` and the venv's pip.
    pub fn new(root: impl Into<PathBuf>, python: impl Into<PathBuf>) -> Self {
        Self::with_toolchain(root, SystemToolchain::new(python))
    }
}

impl<T: Toolchain> EnvManager<T> {
    pub fn with_toolchain(root: impl Into<PathBuf>, toolchain: T) -> Self {
        Self {
            root: root.into(),
            toolchain,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn toolchain(&self) -> &T {
        &self.toolchain
    }

    /// Resolve a name to its environment without touching the filesystem.
    pub fn environment(&self, name: &str) -> Result<Environment> {
        Environment::new(&self.root, name)
    }

    /// Look up an environment that must already exist.
    fn existing(&self, name: &str) -> Result<Environment> {
        let env = self.environment(name)?;
        if !env.exists() {
            return Err(EnvError::NotFound(name.to_string()));
        }
        Ok(env)
    }

    /// Create a new environment and record its installed packages.
    ///
    /// An existing name short-circuits with [`EnvError::AlreadyExists`] before
    /// any subprocess runs. A failing `venv` or `pip install` leaves the
    /// directory behind; nothing is rolled back.
    pub fn create(&self, name: &str, requirements: Option<&Path>) -> Result<Created> {
        let env = self.environment(name)?;
        if env.exists() {
            return Err(EnvError::AlreadyExists(name.to_string()));
        }

        debug!(path = %env.path().display(), "Creating environment directory");
        fs::create_dir_all(env.path())
            .map_err(|e| EnvError::io("Failed to create environment directory", env.path(), e))?;

        info!(name, "Creating virtual environment");
        self.toolchain.create_venv(env.path())?;

        let (manifest, generated_manifest) = match requirements {
            Some(path) => {
                info!(name, requirements = %path.display(), "Installing requirements");
                self.toolchain.install_requirements(&env.pip(), path)?;
                (path.to_path_buf(), false)
            }
            None => {
                let manifest = env.manifest();
                File::create(&manifest)
                    .map_err(|e| EnvError::io("Failed to create requirements file", &manifest, e))?;
                (manifest, true)
            }
        };

        let exported = self.freeze_into(&env, &manifest);

        Ok(Created {
            environment: env,
            manifest,
            generated_manifest,
            exported,
        })
    }

    /// Shell command that activates `name`.
    ///
    /// The command is returned for printing; the caller's shell is never
    /// modified.
    pub fn activation_hint(&self, name: &str, shell: Option<Shell>) -> Result<String> {
        let env = self.existing(name)?;
        Ok(env.activation_command(shell))
    }

    /// Names of all environments, in directory enumeration order.
    ///
    /// A missing root yields an empty list.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "Root directory does not exist");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root)
            .map_err(|e| EnvError::io("Failed to read root directory", &self.root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| EnvError::io("Failed to read root directory", &self.root, e))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Remove an environment and everything beneath it.
    pub fn delete(&self, name: &str) -> Result<()> {
        let env = self.existing(name)?;
        info!(name, path = %env.path().display(), "Removing environment");
        fs::remove_dir_all(env.path())
            .map_err(|e| EnvError::io("Failed to remove environment", env.path(), e))
    }

    /// Write `pip freeze` output for `name` to `destination`, replacing it.
    pub fn export(&self, name: &str, destination: &Path) -> Result<()> {
        let env = self.existing(name)?;
        self.freeze_into(&env, destination)
    }

    /// The destination is truncated before pip runs, so a failed freeze can
    /// leave it empty.
    fn freeze_into(&self, env: &Environment, destination: &Path) -> Result<()> {
        let file = File::create(destination)
            .map_err(|e| EnvError::io("Failed to open export file", destination, e))?;
        info!(name = env.name(), destination = %destination.display(), "Freezing dependencies");
        self.toolchain.freeze(&env.pip(), file)
    }
}
