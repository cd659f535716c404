use std::{
    borrow::Cow,
    io::{self, StdinLock},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::debug;

use crate::cli::output;
use crate::cli::shell_context::{CliMode, CommandError, LoopControl, ShellContext};
use crate::errors::CliError;
use crate::ledger::{EntryKind, ItemRef};

/// Set to run the shell non-interactively over stdin.
pub const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

const KIND_TAGS: [&str; 2] = ["inc", "exp"];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => {
            let mut source = EditorSource::new(&context)?;
            run_loop(&mut context, &mut source)
        }
        CliMode::Script => run_loop(
            &mut context,
            &mut StdinSource {
                lines: io::stdin().lines(),
            },
        ),
    }
}

/// What a line source produced for one turn of the loop.
enum Prompted {
    Line(String),
    Interrupted,
    Closed,
}

trait LineSource {
    fn next_line(&mut self, context: &ShellContext) -> Result<Prompted, CliError>;

    /// Called after every successfully dispatched command.
    fn refresh(&mut self, _context: &ShellContext) {}
}

struct EditorSource {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl EditorSource {
    fn new(context: &ShellContext) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(context.command_names())));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self, context: &ShellContext) -> Result<Prompted, CliError> {
        match self.editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    if let Err(err) = self.editor.add_history_entry(trimmed) {
                        debug!(error = %err, "history entry not recorded");
                    }
                }
                Ok(Prompted::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Prompted::Interrupted),
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                Ok(Prompted::Closed)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn refresh(&mut self, context: &ShellContext) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_rows(context.row_refs());
        }
    }
}

struct StdinSource {
    lines: io::Lines<StdinLock<'static>>,
}

impl LineSource for StdinSource {
    fn next_line(&mut self, _context: &ShellContext) -> Result<Prompted, CliError> {
        match self.lines.next() {
            Some(line) => Ok(Prompted::Line(line?)),
            None => Ok(Prompted::Closed),
        }
    }
}

fn run_loop(context: &mut ShellContext, source: &mut impl LineSource) -> Result<(), CliError> {
    loop {
        let line = match source.next_line(context)? {
            Prompted::Line(line) => line,
            Prompted::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Prompted::Closed => break,
        };
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => source.refresh(context),
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(message) => {
            output::warning(message);
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(&raw.to_lowercase(), raw, &args)
}

/// Completes command names, entry kinds, and row ids of the current ledger.
struct CommandHelper {
    commands: Vec<String>,
    rows: Vec<ItemRef>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self {
            commands,
            rows: Vec::new(),
        }
    }

    fn set_rows(&mut self, rows: Vec<ItemRef>) {
        self.rows = rows;
    }

    /// Returns the byte offset of the word under the cursor and its candidates.
    fn candidates(&self, prefix: &str) -> (usize, Vec<String>) {
        let start = prefix
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);
        let needle = prefix[start..].to_ascii_lowercase();
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();

        let pool: Vec<String> = match words.as_slice() {
            [] => self.commands.clone(),
            ["add" | "list"] => KIND_TAGS.iter().map(|tag| tag.to_string()).collect(),
            ["del"] => KIND_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .chain(self.rows.iter().map(ItemRef::to_string))
                .collect(),
            ["del", kind] => match kind.parse::<EntryKind>() {
                Ok(kind) => self
                    .rows
                    .iter()
                    .filter(|row| row.kind == kind)
                    .map(|row| row.id.to_string())
                    .collect(),
                Err(_) => Vec::new(),
            },
            _ => Vec::new(),
        };

        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, String> {
    split(input).map_err(|err| err.to_string())
}
