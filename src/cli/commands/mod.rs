pub mod client;
mod entity;
pub mod product;
pub mod report;
pub mod system;

use crate::cli::registry::{CommandGroup, CommandRegistry};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    registry.register_group(CommandGroup::Shell, system::definitions());
    registry.register_group(CommandGroup::Clients, client::definitions());
    registry.register_group(CommandGroup::Products, product::definitions());
    registry.register_group(CommandGroup::Reports, report::definitions());
}
