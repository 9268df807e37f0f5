use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::registry::CommandEntry;
use crate::config::ConfigManager;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "config",
            "Show the active configuration",
            "config",
            cmd_config,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(&context.printer, entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.printer, &context.registry);
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    let printer = &context.printer;
    printer.section(format!("Sales Report {}", meta.version));
    printer.info(format!("  Build hash   : {} ({})", meta.git_hash, meta.git_status));
    printer.info(format!("  Built at     : {}", meta.timestamp));
    printer.info(format!("  Target       : {}", meta.target));
    printer.info(format!("  Profile      : {}", meta.profile));
    printer.info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let manager = ConfigManager::default_location();
    let config = &context.config;
    let printer = &context.printer;
    printer.section("Configuration");
    printer.info(format!("  Config file  : {}", manager.config_path().display()));
    printer.info(format!(
        "  Data dir     : {}",
        config.resolve_data_dir().display()
    ));
    printer.info(format!(
        "  Files        : {}, {}, {}, {}",
        config.files.clients, config.files.products, config.files.orders, config.files.targets
    ));
    printer.info(format!("  Currency     : {}", config.currency));
    printer.info(format!("  Date formats : {}", config.date_formats.join(", ")));
    printer.info(format!(
        "  Top N        : {} per entity, {} overall",
        config.counterpart_top_n, config.global_top_n
    ));
    let labels = |keys: &[crate::domain::RollupKey]| {
        keys.iter()
            .map(|key| key.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    printer.info(format!(
        "  Categories   : {}",
        labels(config.rollup_keys.categories.as_slice())
    ));
    printer.info(format!(
        "  Provinces    : {}",
        labels(config.rollup_keys.provinces.as_slice())
    ));
    printer.info(format!("  Colour       : {}", config.ui_color_enabled));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
