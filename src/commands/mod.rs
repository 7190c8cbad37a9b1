use crate::cli::{Cli, Commands};
use crate::error::{EnvError, Step};
use crate::{ui, Config, EnvManager};
use anyhow::Result;
use clap::CommandFactory;

mod delete;
mod export;
mod init;
mod list;
mod use_env;

/// Dispatch a parsed command line.
///
/// Operation failures are reported as messages and never turn into a
/// non-zero exit; only configuration errors propagate.
pub fn execute(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::resolve(cli.root, cli.python)?;
    let manager = EnvManager::new(config.root, config.python);

    match command {
        Commands::Init {
            version_name,
            requirements,
        } => init::execute(&manager, &version_name, requirements.as_deref()),

        Commands::Use {
            version_name,
            shell,
        } => use_env::execute(&manager, &version_name, shell.as_deref()),

        Commands::List => list::execute(&manager),

        Commands::Delete { version_name } => delete::execute(&manager, &version_name),

        Commands::Export {
            version_name,
            file_path,
        } => export::execute(&manager, &version_name, &file_path),
    }

    Ok(())
}

/// Print an operation failure in the user-facing form.
fn report(err: &EnvError) {
    match err {
        EnvError::AlreadyExists(_) => ui::info(err),
        EnvError::NotFound(_) => ui::warn(err),
        EnvError::CommandFailed { step, stderr, .. } => {
            let action = match step {
                Step::CreateVenv => "creating environment",
                Step::Install => "installing requirements",
                Step::Freeze => "exporting dependencies",
            };
            ui::error(format!("Error {action}: {stderr}"));
        }
        _ => ui::error(err),
    }
}
