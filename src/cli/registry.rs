use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Section a command is listed under in the `help` overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommandGroup {
    Shell,
    Clients,
    Products,
    Reports,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 4] = [
        CommandGroup::Shell,
        CommandGroup::Clients,
        CommandGroup::Products,
        CommandGroup::Reports,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Shell => "Shell",
            CommandGroup::Clients => "Clients",
            CommandGroup::Products => "Products",
            CommandGroup::Reports => "Reports",
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub group: CommandGroup,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            group: CommandGroup::Shell,
            handler,
        }
    }
}

/// Commands in the order they were registered. The table holds a few dozen
/// entries at most, so lookups scan it.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files every entry under `group`. A name registered twice keeps its
    /// first position and takes the newer definition.
    pub fn register_group(
        &mut self,
        group: CommandGroup,
        entries: impl IntoIterator<Item = CommandEntry>,
    ) {
        for mut entry in entries {
            entry.group = group;
            match self.entries.iter_mut().find(|known| known.name == entry.name) {
                Some(known) => *known = entry,
                None => self.entries.push(entry),
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Non-empty groups in `CommandGroup::ALL` order, each with its commands
    /// in registration order.
    pub fn grouped(&self) -> Vec<(CommandGroup, Vec<&CommandEntry>)> {
        CommandGroup::ALL
            .iter()
            .filter_map(|group| {
                let members: Vec<&CommandEntry> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.group == *group)
                    .collect();
                (!members.is_empty()).then_some((*group, members))
            })
            .collect()
    }
}
