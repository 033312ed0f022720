//! The reporting interface between the execution engine and whatever presents its progress.

use crate::config::MachineConfig;
use crate::tape::Tape;
use crate::types::TuringMachineError;

/// A read-only view of the machine, taken between steps.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The head position. May be `-1` or `tape.len()` right after a move off the
    /// materialized segment; the tape grows on the next read.
    pub head: isize,
    /// Number of steps executed so far.
    pub steps: usize,
    /// The current state.
    pub state: &'a str,
    /// The tape.
    pub tape: &'a Tape,
    /// The configuration the machine runs with.
    pub config: &'a MachineConfig,
}

/// Receives a snapshot before the first step, after every step, and after halting.
///
/// `forced` is `true` for the first and last report. Unforced reports may be skipped by the
/// observer; that policy lives outside the engine. Observers may block, e.g. to wait for
/// user input.
pub trait Observer {
    fn observe(&mut self, snapshot: &Snapshot<'_>, forced: bool)
        -> Result<(), TuringMachineError>;
}

/// An observer that ignores every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(
        &mut self,
        _snapshot: &Snapshot<'_>,
        _forced: bool,
    ) -> Result<(), TuringMachineError> {
        Ok(())
    }
}
