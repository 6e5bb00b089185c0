use std::{fs, path::PathBuf, process};

use clap::{Parser, Subcommand};
use infix_stairs::{count_table, count_ways, parse};

/// infix-stairs evaluates simple infix expressions and counts the ways to
/// climb a staircase 1, 2 or 3 steps at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression whose tokens are separated by spaces, such as
    /// "2 * ( 1 + 2 )".
    Eval {
        /// Treats the contents as a file with one expression per line.
        #[arg(short, long)]
        file: bool,

        /// Prints the fully parenthesized expression tree before the result.
        #[arg(short, long)]
        tree: bool,

        contents: String,
    },
    /// Counts the ways to climb a staircase of N steps.
    Steps {
        /// Prints the count for every staircase from 0 to N.
        #[arg(short, long)]
        table: bool,

        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let outcome = match args.command {
        Command::Eval { file, tree, contents } => run_eval(file, tree, contents),
        Command::Steps { table, n } => run_steps(table, n),
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run_eval(file: bool, tree: bool, contents: String) -> Result<(), Box<dyn std::error::Error>> {
    if !file {
        return eval_line(&contents, tree);
    }

    let path = PathBuf::from(&contents);
    let script = fs::read_to_string(&path).map_err(|e| {
                                              format!("Failed to read the input file '{}': {e}",
                                                      path.display())
                                          })?;

    // Every line is evaluated even after a failure; each failure names its line.
    let mut failures = 0;
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = eval_line(line, tree) {
            eprintln!("Line {}: {e}", number + 1);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of the expressions in '{}' failed.", path.display()).into());
    }
    Ok(())
}

fn eval_line(expression: &str, tree: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse(expression)?;
    if tree {
        println!("{parsed}");
    }
    println!("{}", parsed.evaluate()?);

    Ok(())
}

fn run_steps(table: bool, n: i64) -> Result<(), Box<dyn std::error::Error>> {
    if table {
        for (steps, ways) in count_table(n)?.into_iter().enumerate() {
            println!("{steps}: {ways}");
        }
    } else {
        println!("{}", count_ways(n)?);
    }

    Ok(())
}
