use crate::cli::core::{required_arg, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::LedgerEntity;

use super::entity;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "clients",
            "List clients with their revenue",
            "clients",
            cmd_clients,
        ),
        CommandEntry::new("client", "Show one client's details", "client <id>", cmd_client),
        CommandEntry::new(
            "client-top",
            "Top products bought by a client",
            "client-top <id> [n]",
            cmd_client_top,
        ),
        CommandEntry::new(
            "client-monthly",
            "Monthly revenue from a client",
            "client-monthly <id>",
            cmd_client_monthly,
        ),
    ]
}

fn cmd_clients(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Store").max_width(32),
        TableColumn::left("Province"),
        TableColumn::right("Revenue"),
    ]);
    for client in context.session.clients() {
        table.add_row([
            client.id.clone(),
            client.name.clone(),
            client.province.clone(),
            context.amount(client.total_revenue()?),
        ]);
    }

    context
        .printer
        .section(format!("Clients ({})", context.session.clients().len()));
    context.printer.block(&table.render());
    Ok(())
}

fn cmd_client(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "client <id>")?;
    let details = context.session.client(id)?.details()?;

    let printer = &context.printer;
    printer.section(format!("Client {}", details.id));
    printer.info(format!("  Store    : {}", details.name));
    printer.info(format!("  Owner    : {}", details.owner));
    printer.info(format!("  Phone    : {}", details.phone));
    printer.info(format!("  Email    : {}", details.email));
    printer.info(format!("  Province : {}", details.province));
    printer.info(format!(
        "  Revenue  : {}",
        context.amount(details.total_revenue)
    ));
    Ok(())
}

fn cmd_client_top(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "client-top <id> [n]")?;
    let client = context.session.client(id)?;
    entity::show_top(context, client, args.get(1))
}

fn cmd_client_monthly(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "client-monthly <id>")?;
    let client = context.session.client(id)?;
    entity::show_monthly(context, client)
}
