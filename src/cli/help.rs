use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::{Column, TextTable};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    let mut table = TextTable::new(vec![Column::left("Command"), Column::left("Description")]);
    for entry in registry.list() {
        table.push_row(vec![entry.name.to_string(), entry.description.to_string()]);
    }
    output::plain(table.render());
    output::hint("Use `help <command>` for usage details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(entry.name);
    output::plain(entry.description);
    output::plain(format!("Usage: {}", entry.usage));
}
