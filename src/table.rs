//! This module provides the transition table: the raw instruction document as it is read from
//! JSON, the validator that checks it before execution, and the compiled lookup structure the
//! engine steps with.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::config::MachineConfig;
use crate::types::{Transition, TuringMachineError};

/// A single rule as written in the instruction document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The symbol to write. Must be exactly one character.
    pub write: String,
    /// The state to continue in.
    #[serde(rename = "nextState")]
    pub next_state: String,
    /// The movement label, e.g. `"left"` or `"right"`.
    #[serde(rename = "move")]
    pub movement: String,
}

impl Instruction {
    /// Creates a rule from its three fields.
    pub fn new(write: &str, next_state: &str, movement: &str) -> Self {
        Self {
            write: write.to_string(),
            next_state: next_state.to_string(),
            movement: movement.to_string(),
        }
    }
}

/// The instruction document: state -> read symbol -> rule.
pub type Instructions = BTreeMap<String, BTreeMap<String, Instruction>>;

/// Checks every rule of an instruction document.
///
/// Each rule must write exactly one character, use a movement label known to `config`,
/// and continue in a state that is either `end_state` or a key of `instructions`. Rules are
/// visited in sorted order and the first violation is returned.
pub fn validate(
    instructions: &Instructions,
    end_state: &str,
    config: &MachineConfig,
) -> Result<(), TuringMachineError> {
    for (state, cases) in instructions {
        for (symbol, instruction) in cases {
            check_rule(instructions, end_state, config, state, symbol, instruction)?;
        }
    }

    Ok(())
}

fn check_rule(
    instructions: &Instructions,
    end_state: &str,
    config: &MachineConfig,
    state: &str,
    symbol: &str,
    instruction: &Instruction,
) -> Result<(), TuringMachineError> {
    if single_char(&instruction.write).is_none() {
        return Err(TuringMachineError::InvalidWrite {
            state: state.to_string(),
            symbol: symbol.to_string(),
            write: instruction.write.clone(),
        });
    }

    if !config.is_allowed_movement(&instruction.movement) {
        return Err(TuringMachineError::InvalidMove {
            state: state.to_string(),
            symbol: symbol.to_string(),
            movement: instruction.movement.clone(),
            allowed: config
                .allowed_movements()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    if instruction.next_state != end_state && !instructions.contains_key(&instruction.next_state) {
        return Err(TuringMachineError::UndefinedState {
            state: state.to_string(),
            symbol: symbol.to_string(),
            next_state: instruction.next_state.clone(),
        });
    }

    Ok(())
}

/// Returns the only character of `s`, or `None` if `s` is not exactly one character long.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A validated transition table keyed by state and read symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionTable {
    rules: HashMap<String, HashMap<char, Transition>>,
}

impl TransitionTable {
    /// Validates `instructions` and compiles them into a lookup table.
    ///
    /// Read keys that are not a single character can never match a tape cell; they are
    /// skipped with a warning.
    pub fn compile(
        instructions: &Instructions,
        end_state: &str,
        config: &MachineConfig,
    ) -> Result<Self, TuringMachineError> {
        config.validate()?;
        validate(instructions, end_state, config)?;

        let mut rules = HashMap::with_capacity(instructions.len());
        for (state, cases) in instructions {
            let mut transitions = HashMap::with_capacity(cases.len());

            for (symbol, instruction) in cases {
                let Some(read) = single_char(symbol) else {
                    tracing::warn!(
                        state = %state,
                        symbol = %symbol,
                        "ignoring rule with multi-character read symbol"
                    );
                    continue;
                };

                // Both are guaranteed by `validate`.
                let (Some(write), Some(offset)) = (
                    single_char(&instruction.write),
                    config.offset(&instruction.movement),
                ) else {
                    continue;
                };

                transitions.insert(
                    read,
                    Transition {
                        write,
                        next_state: instruction.next_state.clone(),
                        movement: instruction.movement.clone(),
                        offset,
                    },
                );
            }

            rules.insert(state.clone(), transitions);
        }

        Ok(Self { rules })
    }

    /// Finds the transition for `state` reading `symbol`.
    ///
    /// A missing pair is an `UndefinedTransition` error; the engine never guesses a rule.
    pub fn lookup(&self, state: &str, symbol: char) -> Result<&Transition, TuringMachineError> {
        self.rules
            .get(state)
            .and_then(|transitions| transitions.get(&symbol))
            .ok_or_else(|| TuringMachineError::UndefinedTransition(state.to_string(), symbol))
    }

    /// Returns `true` if `state` has an entry in the table.
    pub fn contains_state(&self, state: &str) -> bool {
        self.rules.contains_key(state)
    }

    /// Returns the defined states in sorted order.
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        states.sort_unstable();
        states
    }

    /// Returns the total number of transitions.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the table holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
