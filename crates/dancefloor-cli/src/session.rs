//! An interactive play session over one puzzle at a time.

use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use dancefloor_core::KidType;
use dancefloor_game::{MoveEvent, MoveOutcome, Puzzle, PuzzleDesc, PuzzleError};
use dancefloor_generator::CatalogEntry;

use crate::command::{Command, HELP};

/// Kid type that drives moves until another one is selected.
pub const DEFAULT_DRIVING: KidType = KidType::BoyWeak;

/// Errors that can occur while running session commands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// `load` named a puzzle the catalog does not have.
    #[display("there is no puzzle {number} (the catalog has {available})")]
    UnknownPuzzle {
        /// Requested one-based number.
        number: usize,
        /// Number of catalog entries.
        available: usize,
    },
    /// The puzzle rejected the layout or the move.
    #[display("{_0}")]
    #[from]
    Puzzle(PuzzleError),
}

/// The puzzle being played, its title and the selected driving type.
#[derive(Debug)]
pub struct Session {
    catalog: Vec<CatalogEntry>,
    title: String,
    puzzle: Puzzle,
    driving: KidType,
}

impl Session {
    /// Opens a session on `desc`, titled `title`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Puzzle`] if the layout is not a valid puzzle.
    pub fn new(
        title: impl Into<String>,
        desc: &PuzzleDesc,
        catalog: Vec<CatalogEntry>,
    ) -> Result<Self, SessionError> {
        let puzzle = Puzzle::from_desc(desc)?;
        Ok(Self {
            catalog,
            title: title.into(),
            puzzle,
            driving: DEFAULT_DRIVING,
        })
    }

    /// Opens a session on the `number`th catalog entry, counting from one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPuzzle`] if the catalog has no such
    /// entry.
    pub fn from_catalog(catalog: Vec<CatalogEntry>, number: usize) -> Result<Self, SessionError> {
        let entry = catalog_entry(&catalog, number)?;
        let (title, desc) = (entry.name.clone(), entry.puzzle.desc.clone());
        Self::new(title, &desc, catalog)
    }

    /// Returns the title of the current puzzle.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the kid type that drives moves.
    #[must_use]
    pub fn driving(&self) -> KidType {
        self.driving
    }

    /// Runs `command`, writing its report to `out`.
    ///
    /// Returns [`ControlFlow::Break`] when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error if `load` names an unknown puzzle or the puzzle
    /// rejects the move. The session is unchanged in that case.
    pub fn execute<W>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<ControlFlow<()>, SessionError>
    where
        W: Write + ?Sized,
    {
        log::debug!("executing {command:?}");
        match command {
            Command::Move(direction) => {
                let outcome = self.puzzle.make_move(direction, self.driving)?;
                write_outcome(out, &outcome);
                self.write_board(out);
            }
            Command::SelectType(kid_type) => {
                self.driving = kid_type;
                writeln_or_log(out, format_args!("{kid_type} kids will move"));
            }
            Command::Reset => {
                let reset = self.puzzle.reset();
                log::info!("reset {}: {} groups restored", self.title, reset.restored.len());
                writeln_or_log(out, format_args!("back to the start of {}", self.title));
                self.write_board(out);
            }
            Command::Load(number) => {
                let entry = catalog_entry(&self.catalog, number)?;
                let puzzle = Puzzle::from_desc(&entry.puzzle.desc)?;
                self.title.clone_from(&entry.name);
                self.puzzle = puzzle;
                log::info!("loaded {} (seed {})", entry.name, entry.puzzle.seed);
                self.write_board(out);
            }
            Command::Show => self.write_board(out),
            Command::Help => writeln_or_log(out, format_args!("{HELP}")),
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Writes the title, the board, the score and the driving type.
    pub fn write_board<W>(&self, out: &mut W)
    where
        W: Write + ?Sized,
    {
        let puzzle = &self.puzzle;
        writeln_or_log(
            out,
            format_args!(
                "{} ({}x{}, {} kids left)",
                self.title,
                puzzle.width(),
                puzzle.height(),
                puzzle.total_kids()
            ),
        );
        writeln_or_log(out, format_args!("{}", puzzle.grid()));
        let kids = puzzle
            .kids_by_type()
            .iter()
            .map(|(kid_type, count)| format!("{kid_type} {count}"))
            .collect::<Vec<_>>();
        writeln_or_log(out, format_args!("kids: {}", kids.join(", ")));
        writeln_or_log(out, format_args!("{}", puzzle.score()));
        writeln_or_log(out, format_args!("moving: {}", self.driving));
    }
}

fn catalog_entry(catalog: &[CatalogEntry], number: usize) -> Result<&CatalogEntry, SessionError> {
    number
        .checked_sub(1)
        .and_then(|index| catalog.get(index))
        .ok_or(SessionError::UnknownPuzzle {
            number,
            available: catalog.len(),
        })
}

fn write_outcome<W>(out: &mut W, outcome: &MoveOutcome)
where
    W: Write + ?Sized,
{
    if !outcome.anything_moved() {
        writeln_or_log(
            out,
            format_args!("no {} kids could move {}", outcome.driving, outcome.direction),
        );
    }
    for event in &outcome.events {
        writeln_or_log(out, format_args!("  {}", describe_event(event)));
    }
    let delta = outcome.delta;
    if delta.dances > 0 || delta.tears > 0 {
        writeln_or_log(
            out,
            format_args!("{} dances, {} tears", delta.dances, delta.tears),
        );
    }
}

/// Returns a one-line description of `event`.
#[must_use]
pub fn describe_event(event: &MoveEvent) -> String {
    match *event {
        MoveEvent::Relocated { id, from, to } => format!("{id} moved {from} -> {to}"),
        MoveEvent::Merged {
            location,
            survivor,
            absorbed,
            count,
        } => format!("{survivor} took in {absorbed} at {location}, now {count}"),
        MoveEvent::Danced {
            location,
            mover,
            partner,
            pairs,
            mover_left,
            partner_left,
        } => format!(
            "{mover} danced with {partner} at {location}: {pairs} pairs, {mover_left} and {partner_left} left"
        ),
        MoveEvent::Destroyed { id, location } => format!("{id} left the floor at {location}"),
    }
}

fn writeln_or_log<W>(out: &mut W, args: std::fmt::Arguments<'_>)
where
    W: Write + ?Sized,
{
    if let Err(err) = writeln!(out, "{args}") {
        log::warn!("failed to write output: {err}");
    }
}

/// Reads commands from `input` until `quit` or end of input, reporting to
/// `out`. Bad commands and rejected moves are reported and skipped.
///
/// # Errors
///
/// Returns an error if reading `input` fails.
pub fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> io::Result<()>
where
    R: io::BufRead,
    W: Write + ?Sized,
{
    session.write_board(out);
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let result = line
                .parse::<Command>()
                .map_err(|err| err.to_string())
                .and_then(|command| session.execute(command, out).map_err(|err| err.to_string()));
            match result {
                Ok(ControlFlow::Break(())) => return Ok(()),
                Ok(ControlFlow::Continue(())) => {}
                Err(message) => writeln!(out, "error: {message} (try `help`)")?,
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
