// UI layer: the interactive menu loop. Prompts go through the `Prompter`
// trait so the loop can be driven by a script in tests; the terminal
// implementation uses `dialoguer`. Reports are written to `out`, warnings
// and error reports to `err` (stdout and stderr in the binary).

use crate::api::SharpApi;
use crate::catalog::{run_operation, Operation, RunStatus};
use crate::config::Settings;
use anyhow::{anyhow, Result};
use dialoguer::{Confirm, Select};
use std::io::Write;

/// Rows visible at once in the operation menu.
pub const PAGE_SIZE: usize = 24;
pub const MENU_PROMPT: &str = "Which API job test would you like to run?";
pub const CONTINUE_PROMPT: &str = "Would you like to run another test?";
pub const FAREWELL: &str = "Exiting the application. Goodbye!";

/// Source of user decisions for the menu loop.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Keyboard-driven prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .max_length(PAGE_SIZE)
            .interact()?;
        Ok(selection)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Single(Operation),
    RunAll,
    Exit,
}

impl MenuChoice {
    /// Every catalog entry in declaration order, then "Run All" and "Exit".
    pub fn all() -> Vec<MenuChoice> {
        Operation::ALL
            .iter()
            .copied()
            .map(MenuChoice::Single)
            .chain([MenuChoice::RunAll, MenuChoice::Exit])
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Single(op) => op.label(),
            MenuChoice::RunAll => "Run All Tests",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Tally of one "Run All" batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub completed: usize,
    pub skipped: usize,
    pub failed: Vec<Operation>,
}

/// Main interactive menu. Runs until the user picks "Exit" or declines to
/// run another test. Operation failures are reported on `err` and never end
/// the loop.
pub fn main_menu(
    api: &dyn SharpApi,
    settings: &Settings,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let choices = MenuChoice::all();
    let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();

    loop {
        let index = prompter.select(MENU_PROMPT, &labels)?;
        let choice = *choices
            .get(index)
            .ok_or_else(|| anyhow!("menu selection {} out of range", index))?;

        match choice {
            MenuChoice::Exit => {
                writeln!(out, "{}", FAREWELL)?;
                return Ok(());
            }
            MenuChoice::RunAll => {
                run_all(api, settings, out, err)?;
            }
            MenuChoice::Single(op) => {
                if let Err(e) = run_operation(op, api, settings, out, err) {
                    report_error(op, &e, err)?;
                }
            }
        }

        if !prompter.confirm(CONTINUE_PROMPT, false)? {
            writeln!(out, "{}", FAREWELL)?;
            return Ok(());
        }
    }
}

/// Run every catalog entry once, in declaration order. A failing entry is
/// reported and the batch moves on to the next one.
pub fn run_all(
    api: &dyn SharpApi,
    settings: &Settings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for op in Operation::ALL {
        match run_operation(op, api, settings, out, err) {
            Ok(RunStatus::Completed) => summary.completed += 1,
            Ok(RunStatus::Skipped) => summary.skipped += 1,
            Err(e) => {
                report_error(op, &e, err)?;
                summary.failed.push(op);
            }
        }
    }
    writeln!(
        out,
        "Run All finished: {} completed, {} skipped, {} failed",
        summary.completed,
        summary.skipped,
        summary.failed.len()
    )?;
    Ok(summary)
}

/// Print the failure with its cause chain (and a backtrace when
/// `RUST_BACKTRACE` is set).
fn report_error(op: Operation, error: &anyhow::Error, err: &mut dyn Write) -> Result<()> {
    log::error!("{} failed: {:#}", op.key(), error);
    writeln!(err, "An error occurred:")?;
    writeln!(err, "{:?}", error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_operations_then_batch_then_exit() {
        let choices = MenuChoice::all();
        assert_eq!(choices.len(), Operation::ALL.len() + 2);
        assert!(choices.len() <= PAGE_SIZE);
        assert_eq!(choices[0], MenuChoice::Single(Operation::Ping));
        assert_eq!(choices[choices.len() - 2], MenuChoice::RunAll);
        assert_eq!(choices[choices.len() - 1], MenuChoice::Exit);
    }

    #[test]
    fn labels_match_menu_text() {
        assert_eq!(MenuChoice::RunAll.label(), "Run All Tests");
        assert_eq!(MenuChoice::Exit.label(), "Exit");
        assert_eq!(
            MenuChoice::Single(Operation::Translate).label(),
            "Translate Text Test"
        );
    }
}
