use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use sudokugen::{Board, Generator, Solver};

#[derive(Parser)]
#[command(name = "sudokugen", version, about = "Solve and generate sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and print every solution found.
    Solve {
        /// Path to the puzzle file.
        file: PathBuf,
    },
    /// Generate puzzles with a unique solution.
    Generate {
        /// How many puzzles to emit.
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Number of clues each puzzle should be reduced to.
        #[arg(long, default_value_t = 25)]
        clues: u8,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve { file } => solve(&file),
        Command::Generate { count, clues } => generate(count, clues),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn solve(path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let board = Board::from_reader(BufReader::new(file))
        .with_context(|| format!("could not load puzzle from {}", path.display()))?;

    println!("{board}");
    log::debug!("loaded board\n{}", board.debug_grid());

    let mut n_solutions = 0u64;
    for solution in Solver::new(board) {
        println!();
        println!("{solution}");
        n_solutions += 1;
    }
    match n_solutions {
        0 => println!("no solution"),
        n => println!("{n} solution(s)"),
    }
    Ok(())
}

fn generate(count: u32, clues: u8) -> anyhow::Result<()> {
    for i in 0..count {
        let mut generator = Generator::new()?;
        let board = generator
            .next_with_clues(clues)
            .context("reduction paths exhausted before reaching the requested clue count")?;
        if i > 0 {
            println!();
        }
        println!("{board}");
    }
    Ok(())
}
