//! Views shared by the client and product commands.

use crate::cli::chart::{Bar, BarChart};
use crate::cli::core::{parse_count, CommandResult, ShellContext};
use crate::cli::table::{Table, TableColumn};
use crate::core::LedgerEntity;
use crate::currency::format_number;
use crate::domain::{month_label, Metric};

/// Top counterparts of one entity by summed quantity.
pub(super) fn show_top<E: LedgerEntity>(
    context: &ShellContext,
    entity: &E,
    count: Option<&&str>,
) -> CommandResult {
    let n = parse_count(count, context.session.counterpart_top_n())?;
    let metric = Metric::default();
    let ranked = entity.top_n_counterpart(n, metric)?;
    let counterpart = E::JOIN.counterpart();

    context
        .printer
        .section(format!("Top {} {}s for {} `{}`", n, counterpart, E::JOIN, entity.id()));
    if ranked.is_empty() {
        context.printer.info("No orders.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left(counterpart.column_name()),
        TableColumn::right(metric.label()),
    ]);
    for (rank, entry) in ranked.iter().enumerate() {
        table.add_row([
            (rank + 1).to_string(),
            entry.key.clone(),
            format_number(entry.value, 0),
        ]);
    }
    context.printer.block(&table.render());
    Ok(())
}

/// Twelve-month revenue table and chart for one entity.
pub(super) fn show_monthly<E: LedgerEntity>(context: &ShellContext, entity: &E) -> CommandResult {
    let series = entity.monthly_series()?;

    context
        .printer
        .section(format!("Monthly revenue for {} `{}`", E::JOIN, entity.id()));

    let mut chart = BarChart::new();
    for (month, amount) in series.iter() {
        chart.push(Bar::new(month_label(month), amount, context.amount(amount)));
    }
    context.printer.block(&chart.render());
    context
        .printer
        .info(format!("Total: {}", context.amount(series.total())));
    Ok(())
}
