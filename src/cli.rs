use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Python Virtual Environment Version Manager
///
/// venvmanager keeps named virtual environments under a single root directory
/// (`.venvmanager` in the current directory by default). Environments are
/// created with `python -m venv` and populated with the environment's own pip.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding all environments
    #[arg(long, global = true, value_name = "DIR", env = "VENVMANAGER_ROOT")]
    pub root: Option<PathBuf>,

    /// Interpreter used to create environments
    #[arg(long, global = true, value_name = "PYTHON", env = "VENVMANAGER_PYTHON")]
    pub python: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new environment
    ///
    /// Does nothing if an environment with this name already exists.
    Init {
        /// The version name for the environment
        #[arg(value_name = "VERSION_NAME")]
        version_name: String,

        /// Path to the requirements file
        #[arg(short, long, value_name = "PATH")]
        requirements: Option<PathBuf>,
    },

    /// Activate an environment
    ///
    /// Prints the command to run in your shell. A separate process cannot
    /// change the environment of the shell that started it, so activation
    /// must be done by sourcing the printed script yourself.
    Use {
        /// The version name for the environment
        #[arg(value_name = "VERSION_NAME")]
        version_name: String,

        /// Shell to print the activation command for (bash, zsh, powershell; fish off Windows, cmd on Windows)
        #[arg(short, long, value_name = "SHELL")]
        shell: Option<String>,
    },

    /// List all environments
    List,

    /// Delete an environment
    Delete {
        /// The version name for the environment
        #[arg(value_name = "VERSION_NAME")]
        version_name: String,
    },

    /// Export environment dependencies
    Export {
        /// The version name for the environment
        #[arg(value_name = "VERSION_NAME")]
        version_name: String,

        /// The file path to export dependencies
        #[arg(value_name = "FILE_PATH")]
        file_path: PathBuf,
    },
}
