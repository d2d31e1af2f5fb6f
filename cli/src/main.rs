#![warn(clippy::pedantic)]

use std::io::stdin;

use clap::{ArgAction, Parser, Subcommand};
use cube_core::{
    Color, Cube, DEFAULT_SCRAMBLE_LEN, Face, format_moves, parse_move_sequence, scramble,
};
use itertools::Itertools;
use log::LevelFilter;
use owo_colors::OwoColorize;

/// Simulates a 3x3x3 cube at the facelet level.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The level of log output to send to stderr. Can be set zero to three
    /// times.
    #[arg(short, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print the result
    Apply {
        /// Whitespace-separated moves in face-turn notation, e.g. "R U R' U'"
        sequence: String,
    },
    /// Scramble a solved cube and print the sequence used
    Scramble {
        /// Number of random quarter turns
        #[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LEN)]
        count: usize,
    },
    /// Drive a cube interactively from stdin
    Interactive,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Apply { sequence } => {
            let moves = parse_move_sequence(&sequence)?;
            let mut cube = Cube::solved();
            cube.apply_all(&moves);
            render(&cube);
        }
        Commands::Scramble { count } => {
            let mut cube = Cube::solved();
            let sequence = scramble(&mut cube, count);
            println!("{}", format_moves(&sequence));
            render(&cube);
        }
        Commands::Interactive => run_interactive()?,
    }

    Ok(())
}

fn run_interactive() -> color_eyre::Result<()> {
    let mut cube = Cube::solved();
    render(&cube);
    eprintln!("Moves: U R F D L B, suffix ' for counter-clockwise.");
    eprintln!("Commands: scramble [n], reset, quit.");

    let mut line = String::new();
    loop {
        eprint!("> ");
        line.clear();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };

        match first {
            "quit" | "exit" => return Ok(()),
            "reset" => cube.reset(),
            "scramble" => {
                let count = match words.next().map(str::parse) {
                    None => DEFAULT_SCRAMBLE_LEN,
                    Some(Ok(count)) => count,
                    Some(Err(_)) => {
                        eprintln!("scramble takes an optional move count");
                        continue;
                    }
                };
                let sequence = scramble(&mut cube, count);
                println!("{}", format_moves(&sequence));
            }
            _ => match parse_move_sequence(&line) {
                Ok(moves) => cube.apply_all(&moves),
                Err(err) => {
                    // Invalid notation never touches the cube.
                    eprintln!("{err}");
                    continue;
                }
            },
        }

        render(&cube);
    }
}

/// Print the cube as an unfolded net: U on top, the L F R B band in the
/// middle, D at the bottom.
fn render(cube: &Cube) {
    let margin = " ".repeat(6);

    for row in 0..3 {
        println!("{margin} {}", face_row(cube, Face::U, row));
    }
    for row in 0..3 {
        let band = [Face::L, Face::F, Face::R, Face::B]
            .iter()
            .map(|&face| face_row(cube, face, row))
            .join(" ");
        println!("{band}");
    }
    for row in 0..3 {
        println!("{margin} {}", face_row(cube, Face::D, row));
    }
}

fn face_row(cube: &Cube, face: Face, row: usize) -> String {
    let stickers = cube.face(face);
    (0..3).map(|col| paint(stickers[row * 3 + col])).collect()
}

fn paint(color: Color) -> String {
    let (r, g, b) = match color {
        Color::White => (235, 235, 235),
        Color::Red => (214, 48, 36),
        Color::Blue => (45, 92, 214),
        Color::Yellow => (237, 212, 0),
        Color::Orange => (245, 140, 25),
        Color::Green => (22, 160, 74),
    };

    format!("{}", "██".truecolor(r, g, b))
}
