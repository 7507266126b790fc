use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use scientific_calculator::formatter::{format_result, result_text};
use scientific_calculator::interpreter::scientific::AngleUnit;
use scientific_calculator::interpreter::{
    calculate, calculate_percent, calculate_scientific_function, explain, postfix_to_string,
    to_postfix,
};
use scientific_calculator::state::storage::{FileStore, StorageService};
use scientific_calculator::state::{CalculatorState, HistoryItem, Theme};
use std::path::PathBuf;

/// A scientific calculator
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(flatten)]
    verbose: Verbosity,

    /// Directory the calculator state and history are kept in
    #[clap(long, global = true)]
    state_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression
    Eval {
        /// The expression to evaluate, e.g. "(2 + 3) * 4"
        expression: String,
        /// Also print the expression in postfix notation
        #[clap(long)]
        postfix: bool,
        /// Also print the expression tree
        #[clap(long)]
        tree: bool,
    },
    /// Applies a scientific function to a value
    Func {
        /// One of sin, cos, tan, asin, acos, atan, log, ln, exp, sqrt, cbrt, pow2, inv, abs, fact
        name: String,
        #[clap(allow_hyphen_values = true)]
        value: f64,
        /// Treat angles as radians instead of the stored angle unit
        #[clap(long)]
        radians: bool,
    },
    /// Calculates a percentage, optionally of a base value
    Percent {
        value: String,
        base: Option<String>,
    },
    /// Shows the calculation history
    History {
        /// Delete the history instead
        #[clap(long)]
        clear: bool,
    },
    /// Shows or changes the stored theme
    Theme {
        /// The theme to switch to
        #[clap(value_enum)]
        theme: Option<ThemeChoice>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::System => Theme::System,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let state_directory = resolve_state_directory(args.state_dir)?;
    debug!("Keeping state in {}", state_directory.display());
    let mut storage = StorageService::new(FileStore::new(state_directory));
    let mut state = storage.load_state().unwrap_or_default();

    match args.command {
        Command::Eval {
            expression,
            postfix,
            tree,
        } => {
            if postfix {
                let postfix_tokens = to_postfix(&expression)
                    .with_context(|| format!("Could not parse '{}'", expression))?;
                println!("{}", postfix_to_string(&postfix_tokens));
            }
            if tree {
                let tree = explain(&expression)
                    .with_context(|| format!("Could not parse '{}'", expression))?;
                print!("{}", tree);
            }
            let value = calculate(&expression)
                .with_context(|| format!("Could not evaluate '{}'", expression))?;
            let result = result_text(value);
            println!("{}", format_result(&result));
            record_calculation(&mut state, expression, result);
        }
        Command::Func {
            name,
            value,
            radians,
        } => {
            let unit = if radians {
                AngleUnit::Radians
            } else {
                state.angle_unit()
            };
            info!("Evaluating {}({}) in {:?}", name, value, unit);
            let result = calculate_scientific_function(&name, value, unit)
                .with_context(|| format!("Could not evaluate {}({})", name, value))?;
            let result = result_text(result);
            println!("{}", format_result(&result));
            record_calculation(&mut state, format!("{}({})", name, value), result);
        }
        Command::Percent { value, base } => {
            println!("{}", calculate_percent(&value, base.as_deref()));
            return Ok(());
        }
        Command::History { clear } => {
            if clear {
                state.clear_history();
                info!("History cleared");
            } else {
                for item in state.history.iter().rev() {
                    println!("{}", history_line(item));
                }
                return Ok(());
            }
        }
        Command::Theme { theme } => match theme {
            Some(choice) => state.theme = choice.into(),
            None => {
                println!("{}", state.theme.name());
                return Ok(());
            }
        },
    }

    storage.save_state(&state);
    Ok(())
}

fn record_calculation(state: &mut CalculatorState, expression: String, result: String) {
    state.add_history(HistoryItem::new(expression.clone(), result.clone()));
    state.expression = expression;
    state.current_number.clear();
    state.result = Some(result);
}

fn history_line(item: &HistoryItem) -> String {
    format!("{} = {}", item.expression, format_result(&item.result))
}

fn resolve_state_directory(state_dir: Option<PathBuf>) -> Result<PathBuf> {
    match state_dir {
        Some(directory) => Ok(directory),
        None => dirs::data_dir()
            .map(|directory| directory.join("scientific-calculator"))
            .context("Could not determine a data directory, pass --state-dir"),
    }
}
