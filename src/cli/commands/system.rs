use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};
use crate::currency::CurrencySettings;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change display settings",
            "config [currency <CODE>]",
            cmd_config,
        ),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Configuration");
            output::row(format!("File      {}", context.config_manager.path().display()));
            output::row(format!("Locale    {}", context.config.locale));
            output::row(format!(
                "Currency  {} ({})",
                context.config.currency.code,
                context.config.currency.symbol()
            ));
            Ok(())
        }
        ["currency", code] => {
            let currency = CurrencySettings {
                code: code.to_uppercase(),
                ..context.config.currency.clone()
            };
            context.config.currency = currency.clone();
            context.config_manager.save(&context.config)?;
            context.controller.view_mut().set_currency(currency);
            output::success(format!("Currency set to {}", code.to_uppercase()));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: config [currency <CODE>]".into(),
        )),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(command) => {
                output::info(format!("{} - {}", command.name, command.description));
                output::row(format!("Usage: {}", command.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    for command in context.registry.list() {
        output::row(format!("{:<8} {}", command.name, command.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
