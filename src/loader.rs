//! This module provides the `ProgramLoader` struct, responsible for reading instruction
//! documents from files and strings.

use crate::table::Instructions;
use crate::types::TuringMachineError;
use std::fs;
use std::path::Path;

/// `ProgramLoader` is a utility struct for loading instruction documents.
///
/// An instruction document is a JSON object of the form
/// `{ state: { symbol: { "write": .., "nextState": .., "move": .. } } }`.
/// Loading only checks the document's shape; rule contents are checked by
/// [`validate`](crate::table::validate) when a machine is built.
pub struct ProgramLoader;

impl ProgramLoader {
    /// Loads an instruction document from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(Instructions)` if the file is read and parsed.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * `Err(TuringMachineError::ParseError)` if the content is not an instruction document.
    pub fn load_instructions(path: &Path) -> Result<Instructions, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!(
                "error reading instruction file {}: {}",
                path.display(),
                e
            ))
        })?;

        let instructions = Self::load_instructions_from_string(&content)?;
        tracing::debug!(path = %path.display(), states = instructions.len(), "loaded instructions");

        Ok(instructions)
    }

    /// Parses an instruction document from the provided string content.
    pub fn load_instructions_from_string(
        content: &str,
    ) -> Result<Instructions, TuringMachineError> {
        serde_json::from_str(content).map_err(|e| {
            TuringMachineError::ParseError(format!("error parsing JSON instructions: {}", e))
        })
    }
}
