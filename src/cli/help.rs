use crate::cli::output::Printer;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(printer: &Printer, registry: &CommandRegistry) {
    printer.section("Available commands");
    for (group, entries) in registry.grouped() {
        printer.info(format!("{}:", group.title()));
        for entry in entries {
            printer.info(format!("  {:<16} {}", entry.name, entry.description));
        }
    }
    printer.info("Use `help <command>` for details.");
}

pub fn print_command(printer: &Printer, entry: &CommandEntry) {
    printer.section(format!("Help: {}", entry.name));
    printer.info(format!("  Description: {}", entry.description));
    printer.info(format!("  Usage: {}", entry.usage));
}
