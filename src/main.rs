use std::{fs, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ninegrid::{
    api::{self, CheckRequest, ErrorReply, SolveRequest},
    logger::SolveLog,
    puzzle::Puzzle,
};

#[derive(Parser, Debug)]
#[command(name = "ninegrid", version, about = "9x9 Sudoku placement checker and solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle by single-candidate elimination
    Solve(SolveArgs),
    /// Check whether a value may be placed at a coordinate
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Path to a puzzle file (81 chars, . or 0 for blanks). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write per-pass trace files under ./tracelogs
    #[arg(long)]
    trace: bool,

    /// Echo trace notes to the console with colors
    #[arg(long)]
    color: bool,

    /// Maximum trace notes to emit (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_notes: usize,

    /// Print the solved grid instead of the JSON reply
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to a puzzle file. If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Cell coordinate, row letter then column digit (e.g. A2)
    #[arg(short, long)]
    coordinate: String,

    /// Digit to test at the coordinate
    #[arg(short, long)]
    value: String,
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // strip line breaks and padding so multi-line puzzle files work; every
    // other character is left for the validator to judge
    Ok(s.split_whitespace().collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve(args) => {
            let req = SolveRequest { puzzle: Some(read_puzzle(&args.input)?) };
            let mut log = if args.trace {
                SolveLog::to_dir("tracelogs", args.color, args.max_notes)
                    .context("creating tracelogs")?
            } else if args.color {
                SolveLog::echo(true, args.max_notes)
            } else {
                SolveLog::quiet()
            };

            match api::solve(&req, &mut log) {
                Ok(reply) => {
                    if args.pretty {
                        // reply.solution is a complete grid by construction
                        print!("{}", Puzzle::parse(&reply.solution)?);
                    } else {
                        println!("{}", serde_json::to_string(&reply)?);
                    }
                }
                Err(e) => fail(e),
            }
        }
        Command::Check(args) => {
            let req = CheckRequest {
                puzzle: Some(read_puzzle(&args.input)?),
                coordinate: Some(args.coordinate),
                value: Some(args.value),
            };
            match api::check(&req) {
                Ok(reply) => println!("{}", serde_json::to_string(&reply)?),
                Err(e) => fail(e),
            }
        }
    }
    Ok(())
}

fn fail(e: ninegrid::Error) -> ! {
    println!("{}", serde_json::to_string(&ErrorReply::from(e)).expect("serialize error reply"));
    process::exit(1);
}
