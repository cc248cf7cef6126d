use crate::cli::registry::CommandRegistry;

pub mod data;
pub mod filters;
pub mod system;
pub mod views;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "users", "user", "summary", "table", "sector", "category", "dates", "group", "metrics",
    "filters", "options", "reset", "help", "exit",
];

pub fn register_all(registry: &mut CommandRegistry) {
    let mut entries = Vec::new();
    entries.extend(data::definitions());
    entries.extend(views::definitions());
    entries.extend(filters::definitions());
    entries.extend(system::definitions());

    for name in ROOT_COMMAND_ORDER {
        if let Some(index) = entries.iter().position(|entry| entry.name == *name) {
            registry.register(entries.remove(index));
        }
    }
    for entry in entries {
        registry.register(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_commands_in_root_order() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }
}
