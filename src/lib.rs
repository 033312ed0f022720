//! This crate provides the core logic for a single-tape Turing Machine simulator.
//! It includes the tape model, the transition table and its validator, the execution
//! engine, and the observer interface used by front-ends to render each step.

pub mod config;
pub mod loader;
pub mod machine;
pub mod observer;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `MachineConfig` struct from the config module.
pub use config::MachineConfig;
/// Re-exports the `ProgramLoader` struct from the loader module.
pub use loader::ProgramLoader;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the observer trait and its helpers.
pub use observer::{NullObserver, Observer, Snapshot};
/// Re-exports the transition table types and the validator.
pub use table::{validate, Instruction, Instructions, TransitionTable};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{Step, Transition, TuringMachineError, DEFAULT_BLANK_SYMBOL};
