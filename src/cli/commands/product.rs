use crate::cli::core::{required_arg, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::LedgerEntity;

use super::entity;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "products",
            "List products with their revenue",
            "products",
            cmd_products,
        ),
        CommandEntry::new(
            "product",
            "Show one product's details",
            "product <id>",
            cmd_product,
        ),
        CommandEntry::new(
            "product-top",
            "Top clients buying a product",
            "product-top <id> [n]",
            cmd_product_top,
        ),
        CommandEntry::new(
            "product-monthly",
            "Monthly revenue from a product",
            "product-monthly <id>",
            cmd_product_monthly,
        ),
    ]
}

fn cmd_products(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Category"),
        TableColumn::left("Name").max_width(32),
        TableColumn::right("Price"),
        TableColumn::right("Revenue"),
    ]);
    for product in context.session.products() {
        table.add_row([
            product.id.clone(),
            product.category.clone(),
            product.name.clone(),
            context.amount(product.price),
            context.amount(product.total_revenue()?),
        ]);
    }

    context
        .printer
        .section(format!("Products ({})", context.session.products().len()));
    context.printer.block(&table.render());
    Ok(())
}

fn cmd_product(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "product <id>")?;
    let details = context.session.product(id)?.details()?;

    let printer = &context.printer;
    printer.section(format!("Product {}", details.id));
    printer.info(format!("  Name          : {}", details.name));
    printer.info(format!("  Category      : {}", details.category));
    printer.info(format!("  Specification : {}", details.specification));
    printer.info(format!("  Unit          : {}", details.unit));
    printer.info(format!("  Price         : {}", context.amount(details.price)));
    printer.info(format!(
        "  Revenue       : {}",
        context.amount(details.total_revenue)
    ));
    Ok(())
}

fn cmd_product_top(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "product-top <id> [n]")?;
    let product = context.session.product(id)?;
    entity::show_top(context, product, args.get(1))
}

fn cmd_product_monthly(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_arg(args, "product-monthly <id>")?;
    let product = context.session.product(id)?;
    entity::show_monthly(context, product)
}
