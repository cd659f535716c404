use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};
use crate::cli::terminal_view::render_row;
use crate::controller::{RawInput, View};
use crate::ledger::{EntryKind, ItemRef};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense item",
            "add <inc|exp> <description> <amount>",
            cmd_add,
        ),
        CommandEntry::new(
            "del",
            "Delete an item by row id",
            "del <income-N|expense-N> | del <inc|exp> <id>",
            cmd_del,
        ),
        CommandEntry::new(
            "list",
            "List recorded items",
            "list [inc|exp]",
            cmd_list,
        ),
        CommandEntry::new("totals", "Show the budget totals", "totals", cmd_totals),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, description @ .., amount] = args else {
        return Err(usage("add <inc|exp> <description> <amount>"));
    };
    if description.is_empty() {
        return Err(usage("add <inc|exp> <description> <amount>"));
    }
    let input = RawInput::new(*kind, description.join(" "), *amount);
    context.controller.add_item(&input)?;
    Ok(())
}

fn cmd_del(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [row_id] => {
            context.controller.delete_row(row_id)?;
        }
        [kind, id] => {
            let kind: EntryKind = kind.parse()?;
            let id = id
                .parse::<u64>()
                .map_err(|_| CommandError::InvalidArguments(format!("Invalid id `{id}`")))?;
            context.controller.delete_item(ItemRef::new(kind, id))?;
        }
        _ => return Err(usage("del <income-N|expense-N> | del <inc|exp> <id>")),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds = match args {
        [] => vec![EntryKind::Income, EntryKind::Expense],
        [kind] => vec![kind.parse::<EntryKind>()?],
        _ => return Err(usage("list [inc|exp]")),
    };

    let ledger = context.controller.ledger();
    let currency = context.controller.view().currency();
    for kind in kinds {
        let entries = ledger.entries(kind);
        output::section(match kind {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expenses",
        });
        if entries.is_empty() {
            output::row("(none)");
        }
        for entry in entries {
            output::row(render_row(entry, currency));
        }
    }
    Ok(())
}

fn cmd_totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.controller.ledger().snapshot();
    context.controller.view_mut().display_totals(&snapshot);
    Ok(())
}

fn usage(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}
