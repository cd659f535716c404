use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    cli::{
        commands,
        output::{self, OutputPreferences},
        registry::{CommandEntry, CommandRegistry},
        terminal_view::TerminalView,
    },
    config::{Config, ConfigManager},
    controller::BudgetController,
    currency::format_minor_units,
    errors::{CliError, ConfigError, LedgerError},
    ledger::ItemRef,
};

const SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) controller: BudgetController<TerminalView>,
    pub(crate) registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            screen_reader_mode: config.screen_reader_mode || mode == CliMode::Script,
            high_contrast_mode: config.high_contrast_mode,
        });

        let mut controller = BudgetController::new(TerminalView::new(config.currency.clone()));
        controller.init(Local::now().date_naive());

        Ok(Self {
            mode,
            config,
            config_manager,
            controller,
            registry: commands::registry(),
        })
    }

    pub(crate) fn prompt(&self) -> String {
        let balance = self.controller.ledger().balance();
        format!(
            "budget [{}]> ",
            format_minor_units(balance, self.controller.view().currency())
        )
    }

    /// Row ids of every recorded entry, income first.
    pub(crate) fn row_refs(&self) -> Vec<ItemRef> {
        let ledger = self.controller.ledger();
        ledger
            .list_income()
            .iter()
            .chain(ledger.list_expenses())
            .map(|entry| entry.item_ref())
            .collect()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, raw: &str) {
        let needle = raw.to_ascii_lowercase();
        let closest = self
            .registry
            .names()
            .map(|name| (levenshtein(&needle, name), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min();
        match closest {
            Some((_, name)) => output::warning(format!(
                "Unknown command `{raw}`. Did you mean `{name}`?"
            )),
            None => output::warning(format!(
                "Unknown command `{raw}`. Type `help` to list commands."
            )),
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell?")
            .default(false)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            // The view has already shown these.
            CommandError::Ledger(LedgerError::InvalidAmount(_))
            | CommandError::Ledger(LedgerError::NotFound { .. }) => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}
