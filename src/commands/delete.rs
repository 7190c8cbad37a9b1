use super::report;
use crate::{ui, EnvManager};

pub fn execute(manager: &EnvManager, name: &str) {
    match manager.delete(name) {
        Ok(()) => ui::success("Deleted", format!("Environment {name} deleted.")),
        Err(err) => report(&err),
    }
}
