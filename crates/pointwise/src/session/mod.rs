//! Menu-driven console session over a point set.
//!
//! Purpose
//! - Drive a turn-based loop: each state renders a menu, reads one decision
//!   and either works on the `SessionContext` or hands an `Event` to
//!   `transition`, which alone decides the next `State`.
//!
//! Structure
//! - `state.rs`: the closed `State`/`Event`/`MenuChoice` enums and the
//!   transition table.
//! - `context.rs`: the session record (points, last operation, last result).
//! - `console.rs`: line-oriented prompts over any `BufRead`/`Write` pair.
//! - `automaton.rs`: state handlers and the run loop.
//!
//! Failure policy
//! - Operation errors and malformed parameters are reported to the user and
//!   lead back to the main menu. Only console I/O errors leave `run`.

mod automaton;
mod console;
mod context;
mod state;

pub use automaton::Automaton;
pub use console::{Console, InputError};
pub use context::{OpOutput, Operation, SessionContext};
pub use state::{transition, Event, MenuChoice, State};

#[cfg(test)]
mod tests;
