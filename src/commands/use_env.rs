use super::report;
use crate::{ui, EnvManager, Shell};

pub fn execute(manager: &EnvManager, name: &str, shell: Option<&str>) {
    let shell = shell.and_then(|requested| match Shell::from_name(requested) {
        Some(shell) if shell.is_supported() => Some(shell),
        Some(shell) => {
            ui::warn(format!(
                "Shell '{}' has no activation script on this platform; using the platform default.",
                shell.as_str()
            ));
            None
        }
        None => {
            ui::warn(format!(
                "Unknown shell '{requested}'; using the platform default."
            ));
            None
        }
    });

    match manager.activation_hint(name, shell) {
        Ok(command) => {
            println!("To activate the environment, run:");
            println!("{command}");
        }
        Err(err) => report(&err),
    }
}
