//! Shell command definitions grouped by concern.

mod entries;
mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for entry in entries::definitions()
        .into_iter()
        .chain(system::definitions())
    {
        registry.register(entry);
    }
    registry
}
