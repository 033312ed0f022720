//! This module defines the `TuringMachine` struct, the execution engine. It owns the tape and
//! the compiled transition table and applies one transition per step until the end state is
//! reached.

use crate::config::MachineConfig;
use crate::observer::{Observer, Snapshot};
use crate::table::{Instructions, TransitionTable};
use crate::tape::Tape;
use crate::types::{Step, TuringMachineError};

/// A single-tape Turing Machine.
///
/// The machine is built from validated instructions and stays `Running` until its current
/// state equals the end state. From then on it is final: further steps do nothing.
#[derive(Debug, Clone)]
pub struct TuringMachine {
    table: TransitionTable,
    tape: Tape,
    state: String,
    end_state: String,
    head: isize,
    step_count: usize,
    config: MachineConfig,
}

impl TuringMachine {
    /// Creates a new machine with its head on the first cell of `tape`.
    ///
    /// # Arguments
    ///
    /// * `instructions` - The instruction document, validated here.
    /// * `tape` - The initial tape; each character becomes one cell.
    /// * `start_state` - The state the machine begins in.
    /// * `end_state` - The state that halts the machine.
    /// * `config` - Blank symbol and movement offsets.
    ///
    /// # Returns
    ///
    /// * `Ok(TuringMachine)` if the instructions are well-formed.
    /// * `Err(TuringMachineError)` describing the first malformed rule otherwise. No step
    ///   is ever executed with an invalid table.
    pub fn new(
        instructions: &Instructions,
        tape: &str,
        start_state: &str,
        end_state: &str,
        config: MachineConfig,
    ) -> Result<Self, TuringMachineError> {
        let table = TransitionTable::compile(instructions, end_state, &config)?;

        tracing::info!(
            states = table.states().len(),
            transitions = table.len(),
            start = start_state,
            end = end_state,
            "machine created"
        );

        Ok(Self {
            table,
            tape: Tape::new(tape, config.blank),
            state: start_state.to_string(),
            end_state: end_state.to_string(),
            head: 0,
            step_count: 0,
            config,
        })
    }

    /// Executes a single step: read, look up, write, change state, move.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if the machine has not reached the end state.
    /// * `Ok(Step::Halt)` if the machine is in the end state after this call.
    /// * `Err(TuringMachineError::UndefinedTransition)` if no rule exists for the current
    ///   state and the symbol under the head. The machine is left unchanged apart from
    ///   tape growth.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if self.is_halted() {
            return Ok(Step::Halt);
        }

        let head = self.tape.index_after_extension(self.head);
        self.head = head as isize;

        let symbol = self.tape[head];
        let transition = self.table.lookup(&self.state, symbol)?;

        tracing::debug!(
            step = self.step_count + 1,
            state = %self.state,
            read = %symbol,
            write = %transition.write,
            next = %transition.next_state,
            head,
            "applying transition"
        );

        self.tape.write(head, transition.write);
        self.state = transition.next_state.clone();
        self.head += transition.offset;
        self.step_count += 1;

        if self.is_halted() {
            tracing::info!(steps = self.step_count, state = %self.state, "machine halted");
            Ok(Step::Halt)
        } else {
            Ok(Step::Continue)
        }
    }

    /// Runs the machine until it reaches the end state, reporting to `observer`.
    ///
    /// The observer receives a forced report before the first step, an unforced report
    /// after every step, and a forced report once the machine halts. A table without a
    /// path to the end state runs forever.
    ///
    /// # Returns
    ///
    /// The final tape with blanks removed.
    pub fn run<O: Observer + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<String, TuringMachineError> {
        observer.observe(&self.snapshot(), true)?;

        while !self.is_halted() {
            self.step()?;
            observer.observe(&self.snapshot(), false)?;
        }

        observer.observe(&self.snapshot(), true)?;
        Ok(self.result())
    }

    /// Returns a view of the machine for observers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            head: self.head,
            steps: self.step_count,
            state: &self.state,
            tape: &self.tape,
            config: &self.config,
        }
    }

    /// Returns the tape contents with all blank cells removed.
    pub fn result(&self) -> String {
        self.tape.stripped()
    }

    /// Checks if the machine has reached its end state.
    pub fn is_halted(&self) -> bool {
        self.state == self.end_state
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the state that halts the machine.
    pub fn end_state(&self) -> &str {
        &self.end_state
    }

    /// Returns the head position. See [`Snapshot::head`] for the range it may take.
    pub fn head(&self) -> isize {
        self.head
    }

    /// Returns the tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the total number of steps executed.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the compiled transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Returns the configuration the machine runs with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
