//! Machine-wide constants bundled into a value each machine owns: the blank symbol, the
//! rendered window size, and the movement labels with their head offsets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{
    TuringMachineError, DEFAULT_BLANK_SYMBOL, DEFAULT_VISIBLE_TAPE_LENGTH, MOVE_LEFT, MOVE_RIGHT,
};

/// Immutable configuration shared by the validator, the engine and observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Symbol found on cells that were never written.
    pub blank: char,
    /// Number of cells an observer shows on each side of the head.
    pub visible_tape_length: usize,
    /// Movement labels accepted in instructions, mapped to head offsets.
    pub movements: BTreeMap<String, isize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            blank: DEFAULT_BLANK_SYMBOL,
            visible_tape_length: DEFAULT_VISIBLE_TAPE_LENGTH,
            movements: BTreeMap::from([(MOVE_RIGHT.to_string(), 1), (MOVE_LEFT.to_string(), -1)]),
        }
    }
}

impl MachineConfig {
    /// Returns a copy of this configuration with a different blank symbol.
    pub fn with_blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Returns a copy of this configuration with a different window size.
    pub fn with_visible_tape_length(mut self, visible_tape_length: usize) -> Self {
        self.visible_tape_length = visible_tape_length;
        self
    }

    /// Returns the head offset for a movement label, if the label is allowed.
    pub fn offset(&self, movement: &str) -> Option<isize> {
        self.movements.get(movement).copied()
    }

    /// Checks whether a movement label is allowed.
    pub fn is_allowed_movement(&self, movement: &str) -> bool {
        self.movements.contains_key(movement)
    }

    /// Returns the allowed movement labels in sorted order.
    pub fn allowed_movements(&self) -> Vec<&str> {
        self.movements.keys().map(String::as_str).collect()
    }

    /// Checks that the configuration can drive a machine.
    ///
    /// The tape grows by a single cell per out-of-bounds read, so offsets are limited to
    /// one cell in either direction.
    pub fn validate(&self) -> Result<(), TuringMachineError> {
        if self.movements.is_empty() {
            return Err(TuringMachineError::InvalidConfig(
                "No movements defined".to_string(),
            ));
        }

        if let Some((label, offset)) = self
            .movements
            .iter()
            .find(|(_, offset)| !(-1..=1).contains(*offset))
        {
            return Err(TuringMachineError::InvalidConfig(format!(
                "Movement {:?} has offset {}, expected -1, 0 or 1",
                label, offset
            )));
        }

        Ok(())
    }
}
