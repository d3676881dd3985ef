//! Terminal front end for the dancefloor puzzle.
//!
//! A [`Session`] holds the puzzle being played and runs [`Command`]s typed
//! at a prompt. The `dancefloor` binary wires it to stdin and stdout.

pub use self::{command::*, session::*};

mod command;
mod session;
