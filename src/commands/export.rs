use super::report;
use crate::{ui, EnvManager};
use std::path::Path;

pub fn execute(manager: &EnvManager, name: &str, file_path: &Path) {
    match manager.export(name, file_path) {
        Ok(()) => ui::success(
            "Exported",
            format!("Dependencies exported to {}.", file_path.display()),
        ),
        Err(err) => report(&err),
    }
}
