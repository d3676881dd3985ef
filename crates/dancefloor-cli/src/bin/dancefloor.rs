//! Plays dancefloor puzzles in the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin dancefloor
//! cargo run --bin dancefloor -- --puzzle 4
//! cargo run --bin dancefloor -- --seed <HEX> --size 6
//! cargo run --bin dancefloor -- --file layout.txt
//! ```
//!
//! Set `RUST_LOG=debug` to trace moves on stderr.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use dancefloor_cli::Session;
use dancefloor_game::{ParseDescError, PuzzleDesc};
use dancefloor_generator::{GeneratorError, LayoutGenerator, PuzzleSeed, default_catalog};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Catalog puzzle to open, counting from 1.
    #[arg(long, value_name = "N", conflicts_with_all = ["seed", "file"])]
    puzzle: Option<usize>,

    /// Generate the layout from this seed (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "file")]
    seed: Option<PuzzleSeed>,

    /// Read the layout from a text file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Board size of generated layouts.
    #[arg(long, value_name = "N", default_value_t = 5)]
    size: u16,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum StartupError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid layout in {}: {source}", path.display())]
    Layout {
        path: PathBuf,
        source: ParseDescError,
    },
    #[display("{_0}")]
    #[from]
    Generator(GeneratorError),
    #[display("{_0}")]
    #[from]
    Session(dancefloor_cli::SessionError),
}

fn open_session(args: &Args) -> Result<Session, StartupError> {
    let catalog = default_catalog();
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path).map_err(|source| StartupError::Read {
            path: path.clone(),
            source,
        })?;
        let desc = text.parse::<PuzzleDesc>().map_err(|source| StartupError::Layout {
            path: path.clone(),
            source,
        })?;
        return Ok(Session::new(path.display().to_string(), &desc, catalog)?);
    }
    if let Some(seed) = args.seed {
        let generated = LayoutGenerator::new(args.size, args.size)?.generate_with_seed(seed);
        log::info!("generated {0}x{0} layout from seed {seed}", args.size);
        return Ok(Session::new(format!("Seed {seed}"), &generated.desc, catalog)?);
    }
    Ok(Session::from_catalog(catalog, args.puzzle.unwrap_or(1))?)
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let mut session = match open_session(&args) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("starting session on {}", session.title());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = dancefloor_cli::run(&mut session, stdin.lock(), &mut stdout) {
        eprintln!("failed to read commands: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
