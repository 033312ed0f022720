//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator, including validated transitions, execution outcomes, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: char = ' ';
/// The default number of cells rendered on each side of the head.
pub const DEFAULT_VISIBLE_TAPE_LENGTH: usize = 20;
/// Movement label that moves the head one cell to the left.
pub const MOVE_LEFT: &str = "left";
/// Movement label that moves the head one cell to the right.
pub const MOVE_RIGHT: &str = "right";

/// A validated transition rule.
///
/// Produced by [`TransitionTable::compile`](crate::table::TransitionTable::compile) from a raw
/// [`Instruction`](crate::table::Instruction) once its write symbol, movement and next state
/// have been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The symbol written under the head.
    pub write: char,
    /// The state the machine moves to.
    pub next_state: String,
    /// The movement label as it appeared in the instructions.
    pub movement: String,
    /// The head offset the movement label resolves to.
    pub offset: isize,
}

/// Represents the outcome of a Turing Machine execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a step and has not reached the end state yet.
    Continue,
    /// The machine is in its end state.
    Halt,
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A transition writes something other than exactly one character.
    #[error(
        "Invalid config! Use ONE character, instead of {write:?} (state {state:?}, symbol {symbol:?})"
    )]
    InvalidWrite {
        state: String,
        symbol: String,
        write: String,
    },
    /// A transition uses a movement label that is not configured.
    #[error(
        "Invalid config! Use one of {allowed:?}, not {movement:?} (state {state:?}, symbol {symbol:?})"
    )]
    InvalidMove {
        state: String,
        symbol: String,
        movement: String,
        allowed: Vec<String>,
    },
    /// A transition points to a state that is neither defined nor the end state.
    #[error(
        "Invalid config! State {next_state:?} needs to be defined (state {state:?}, symbol {symbol:?})"
    )]
    UndefinedState {
        state: String,
        symbol: String,
        next_state: String,
    },
    /// The machine configuration itself is unusable.
    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(String),
    /// No rule is defined for the state and the symbol under the head.
    #[error("No rule defined for state {0:?} and symbol {1:?}")]
    UndefinedTransition(String, char),
    /// Reading the instruction source failed.
    #[error("File error: {0}")]
    FileError(String),
    /// The instruction source is not a valid instruction document.
    #[error("Instruction parsing error: {0}")]
    ParseError(String),
    /// The observer could not report a step.
    #[error("Observer error: {0}")]
    ObserverError(String),
}

impl TuringMachineError {
    /// Returns `true` for errors raised while validating instructions or configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWrite { .. }
                | Self::InvalidMove { .. }
                | Self::UndefinedState { .. }
                | Self::InvalidConfig(_)
        )
    }
}
