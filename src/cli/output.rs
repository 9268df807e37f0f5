use std::fmt;

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

/// Writes styled shell output to stdout.
///
/// Colour is decided once at construction; script mode always prints plain
/// text so captured output stays free of escape codes.
#[derive(Clone, Copy, Debug)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn style(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        let base = match kind {
            MessageKind::Section => format!("=== {} ===", text.trim()),
            MessageKind::Warning => format!("WARNING: {text}"),
            MessageKind::Error => format!("ERROR: {text}"),
            MessageKind::Hint => format!("hint: {text}"),
            MessageKind::Info | MessageKind::Success => text,
        };

        if !self.color {
            return base;
        }

        match kind {
            MessageKind::Success => base.bright_green().to_string(),
            MessageKind::Warning => base.bright_yellow().to_string(),
            MessageKind::Error => base.bright_red().to_string(),
            MessageKind::Hint => base.dimmed().to_string(),
            MessageKind::Section => base.bold().to_string(),
            MessageKind::Info => base,
        }
    }

    pub fn print(&self, kind: MessageKind, message: impl fmt::Display) {
        let formatted = self.style(kind, message);
        match kind {
            MessageKind::Section => println!("\n{formatted}"),
            _ => println!("{formatted}"),
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.print(MessageKind::Info, message);
    }

    pub fn success(&self, message: impl fmt::Display) {
        self.print(MessageKind::Success, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.print(MessageKind::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.print(MessageKind::Error, message);
    }

    pub fn hint(&self, message: impl fmt::Display) {
        self.print(MessageKind::Hint, message);
    }

    pub fn section(&self, title: impl fmt::Display) {
        self.print(MessageKind::Section, title);
    }

    /// Prints a pre-rendered block such as a table or chart.
    pub fn block(&self, text: &str) {
        if !text.is_empty() {
            println!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_printer_adds_labels_without_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.style(MessageKind::Warning, "careful"), "WARNING: careful");
        assert_eq!(printer.style(MessageKind::Section, " Totals "), "=== Totals ===");
        assert_eq!(printer.style(MessageKind::Info, "plain"), "plain");
        assert!(!printer.style(MessageKind::Error, "x").contains('\u{1b}'));
    }
}
