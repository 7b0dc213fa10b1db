//! Command-line front end for keypad-calc.
//!
//! Feeds key presses to a [`CalculatorSession`] and prints what a calculator
//! display would show: the token list after each edit and the output line
//! after each evaluation.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use keypad_calc::{
    CalculatorSession, DEFAULT_PRECISION, InputEvent, Response, TokenList, char_to_event,
    format_outcome, key_to_event,
};
use std::io::Read;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Decimal places shown in results
    #[arg(short, long, global = true, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Types each character of KEYS, then presses `=`
    Eval {
        /// Keys to type, e.g. "2+3*4"
        keys: String,
    },
    /// Replays whitespace-separated key names (e.g. `7 + 3 Enter ArrowLeft`)
    Replay {
        /// Input file with key names, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },
}

fn read_input(path: &str) -> Result<String> {
    let mut buf = String::new();
    if path == "-" {
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("can't read stdin")?;
    } else {
        buf = std::fs::read_to_string(path)
            .with_context(|| format!("can't open {path:?}"))?;
    }
    Ok(buf)
}

/// Applies one event to the session and the display, printing the change.
fn step(
    session: &mut CalculatorSession,
    list: &mut TokenList,
    event: InputEvent,
    precision: u32,
) -> Result<()> {
    match session.handle(event)? {
        Response::Edited(report) => {
            list.reconcile(&report, session.expression().tokens());
            list.refresh_errors(session.expression().tokens());
            let flagged: Vec<&str> = list
                .items()
                .iter()
                .filter_map(|t| t.error.as_deref())
                .collect();
            if flagged.is_empty() {
                println!("  {list}");
            } else {
                println!("  {list}    ! {}", flagged.join(", "));
            }
        }
        Response::Evaluated(eval) => {
            log::info!(
                "{:?} -> {:?}",
                session.expression().to_string(),
                eval.outcome
            );
            println!("= {}", format_outcome(&eval.outcome, precision));
        }
        Response::Cleared => {
            list.clear();
            println!("  (cleared)");
        }
        Response::Resumed(transition) => {
            log::debug!("resumed from {:?}", transition.from);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut session = CalculatorSession::new();
    let mut list = TokenList::new();

    match args.command {
        Commands::Eval { keys } => {
            for ch in keys.chars().filter(|ch| !ch.is_whitespace()) {
                session.handle(char_to_event(ch)?)?;
            }
            let eval = session.evaluate();
            println!(
                "{} = {}",
                session.expression(),
                format_outcome(&eval.outcome, args.precision)
            );
        }
        Commands::Replay { input } => {
            let text = read_input(&input)?;
            for key in text.split_whitespace() {
                step(&mut session, &mut list, key_to_event(key)?, args.precision)?;
            }
        }
    }

    Ok(())
}
