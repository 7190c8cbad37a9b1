use super::report;
use crate::{ui, EnvManager};
use std::path::Path;

pub fn execute(manager: &EnvManager, name: &str, requirements: Option<&Path>) {
    let created = match manager.create(name, requirements) {
        Ok(created) => created,
        Err(err) => return report(&err),
    };

    if created.generated_manifest {
        ui::info(format!(
            "Created empty requirements file at {}. Please add your dependencies to this file.",
            created.manifest.display()
        ));
    }
    ui::success("Created", format!("Environment {name} created successfully."));

    match created.exported {
        Ok(()) => ui::success(
            "Exported",
            format!("Dependencies exported to {}.", created.manifest.display()),
        ),
        Err(err) => report(&err),
    }
}
