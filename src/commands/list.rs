use super::report;
use crate::{ui, EnvManager};

pub fn execute(manager: &EnvManager) {
    match manager.list() {
        Ok(names) if names.is_empty() => ui::info(format!(
            "No environments found in {}.",
            manager.root().display()
        )),
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
        }
        Err(err) => report(&err),
    }
}
