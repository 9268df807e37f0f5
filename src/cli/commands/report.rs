use crate::cli::chart::{Bar, BarChart};
use crate::cli::core::{parse_count, required_arg, CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::LedgerEntity;
use crate::currency::percent_of;
use crate::domain::{month_label, JoinKey, Rollup};

const REPORT_USAGE: &str = "report <category|province|monthly|top-clients|top-products> [n]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "report",
            "Ledger-wide rollups, monthly targets and rankings",
            REPORT_USAGE,
            cmd_report,
        ),
        CommandEntry::new(
            "vip",
            "Clients whose revenue reaches a threshold",
            "vip <threshold>",
            cmd_vip,
        ),
        CommandEntry::new(
            "summary",
            "Headline totals for the loaded data",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = required_arg(args, REPORT_USAGE)?;
    match kind.to_lowercase().as_str() {
        "category" => {
            let rollup = context.session.report().category_rollup()?;
            show_rollup(context, "Revenue by category", "Category", &rollup);
            Ok(())
        }
        "province" => {
            let rollup = context.session.report().province_rollup()?;
            show_rollup(context, "Revenue by province", "Province", &rollup);
            Ok(())
        }
        "monthly" => show_monthly_vs_target(context),
        "top-clients" => show_global_top(context, JoinKey::Client, args.get(1)),
        "top-products" => show_global_top(context, JoinKey::Product, args.get(1)),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown report `{}`; usage: {}",
            other, REPORT_USAGE
        ))),
    }
}

fn show_rollup(context: &ShellContext, title: &str, header: &str, rollup: &Rollup) {
    let whole = rollup.total();
    let mut table = Table::new(vec![
        TableColumn::left(header),
        TableColumn::right("Revenue"),
        TableColumn::right("Share"),
    ]);
    let mut chart = BarChart::new().with_share();
    for entry in rollup.entries() {
        let amount = context.amount(entry.total);
        table.add_row([
            entry.label.clone(),
            amount.clone(),
            format!("{:.1}%", percent_of(entry.total, whole)),
        ]);
        chart.push(Bar::new(entry.label.clone(), entry.total, amount));
    }

    context.printer.section(title);
    context.printer.block(&table.render());
    context.printer.info("");
    context.printer.block(&chart.render());
}

fn show_monthly_vs_target(context: &ShellContext) -> CommandResult {
    let session = &context.session;
    let comparison = session.report().monthly_vs_target(session.targets());
    let rows = comparison.rows();

    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Revenue"),
        TableColumn::right("Target"),
        TableColumn::left("Met"),
    ]);
    let mut chart = BarChart::new();
    for row in &rows {
        let label = month_label(row.month);
        table.add_row([
            label.to_string(),
            context.amount(row.actual),
            context.amount(row.target),
            if row.met() { "yes" } else { "no" }.to_string(),
        ]);
        chart.push(Bar::new(label, row.actual, "").with_marker(row.target));
    }

    let met: Vec<&str> = comparison
        .months_meeting_target()
        .into_iter()
        .map(month_label)
        .collect();

    context.printer.section("Monthly revenue against target");
    context.printer.block(&table.render());
    context.printer.info("");
    context.printer.block(&chart.render());
    context.printer.hint("`+` marks the monthly target.");
    if met.is_empty() {
        context.printer.info("No month reached its target.");
    } else {
        context
            .printer
            .success(format!("Months meeting target: {}", met.join(", ")));
    }
    Ok(())
}

fn show_global_top(context: &ShellContext, dimension: JoinKey, count: Option<&&str>) -> CommandResult {
    let n = parse_count(count, context.session.global_top_n())?;
    let ranked = context.session.report().top_n_global(n, dimension);

    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left(dimension.column_name()),
        TableColumn::left("Name").max_width(32),
        TableColumn::right("Revenue"),
    ]);
    for (rank, entry) in ranked.iter().enumerate() {
        table.add_row([
            (rank + 1).to_string(),
            entry.key.clone(),
            display_name(context, dimension, &entry.key),
            context.amount(entry.value),
        ]);
    }

    context
        .printer
        .section(format!("Top {} {}s by revenue", n, dimension));
    if table.is_empty() {
        context.printer.info("No orders.");
    } else {
        context.printer.block(&table.render());
    }
    Ok(())
}

/// Name for a ranked id; ids present only in the order file show as blank.
fn display_name(context: &ShellContext, dimension: JoinKey, id: &str) -> String {
    let session = &context.session;
    let name = match dimension {
        JoinKey::Client => session.client(id).map(|c| c.name.clone()),
        JoinKey::Product => session.product(id).map(|p| p.name.clone()),
    };
    name.unwrap_or_default()
}

fn cmd_vip(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "vip <threshold>")?;
    let threshold: f64 = raw.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid amount", raw))
    })?;
    let clients = context.session.report().clients_above_threshold(threshold)?;

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Store").max_width(32),
        TableColumn::left("Province"),
        TableColumn::right("Revenue"),
    ]);
    for client in &clients {
        table.add_row([
            client.id.clone(),
            client.name.clone(),
            client.province.clone(),
            context.amount(client.total_revenue()?),
        ]);
    }

    context.printer.section(format!(
        "Clients with revenue of at least {}",
        context.amount(threshold)
    ));
    if table.is_empty() {
        context.printer.info("No clients reach this threshold.");
    } else {
        context.printer.block(&table.render());
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = &context.session;
    let report = session.report();
    let comparison = report.monthly_vs_target(session.targets());

    let printer = &context.printer;
    printer.section("Summary");
    printer.info(format!("  Orders        : {}", session.ledger().len()));
    printer.info(format!("  Clients       : {}", session.clients().len()));
    printer.info(format!("  Products      : {}", session.products().len()));
    printer.info(format!(
        "  Total revenue : {}",
        context.amount(report.grand_total())
    ));
    printer.info(format!(
        "  Annual target : {}",
        context.amount(session.targets().values().iter().sum())
    ));
    printer.info(format!(
        "  Months on target: {} of 12",
        comparison.months_meeting_target().len()
    ));
    Ok(())
}
