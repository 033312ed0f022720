//! Property-based tests for the tape model, the validator and the execution engine.

use proptest::prelude::*;
use turing_machine::{
    validate, Instruction, Instructions, MachineConfig, NullObserver, Tape, TuringMachine,
    TuringMachineError,
};

fn single_rule(state: &str, read: &str, instruction: Instruction) -> Instructions {
    let mut instructions = Instructions::new();
    instructions
        .entry(state.to_string())
        .or_default()
        .insert(read.to_string(), instruction);
    instructions
}

prop_compose! {
    fn arbitrary_movement()(left in any::<bool>()) -> &'static str {
        if left { "left" } else { "right" }
    }
}

proptest! {
    #[test]
    fn left_extension_adds_one_cell_and_rebases(
        input in "[01a ]{0,16}",
        distance in 1isize..50,
    ) {
        let mut tape = Tape::new(&input, ' ');
        let before = tape.contents();

        let index = tape.index_after_extension(-distance);

        prop_assert_eq!(index, 0);
        prop_assert_eq!(tape.len(), before.chars().count() + 1);
        prop_assert_eq!(tape[0], ' ');
        prop_assert_eq!(tape.contents(), format!(" {}", before));
    }

    #[test]
    fn right_extension_adds_one_cell(input in "[01a ]{0,16}", overshoot in 0usize..50) {
        let mut tape = Tape::new(&input, ' ');
        let len = tape.len();

        let index = tape.index_after_extension((len + overshoot) as isize);

        prop_assert_eq!(index, len);
        prop_assert_eq!(tape.len(), len + 1);
        prop_assert_eq!(tape[index], ' ');
    }

    #[test]
    fn in_bounds_reads_never_extend(input in "[01a ]{1,16}", seed in any::<usize>()) {
        let mut tape = Tape::new(&input, ' ');
        let len = tape.len();
        let index = seed % len;

        let symbol = tape.read(index as isize);

        prop_assert_eq!(tape.len(), len);
        prop_assert_eq!(Some(symbol), input.chars().nth(index));
    }

    #[test]
    fn stripped_removes_only_blanks(input in "[01a ]{0,32}") {
        let tape = Tape::new(&input, ' ');

        prop_assert_eq!(tape.stripped(), input.replace(' ', ""));
    }

    #[test]
    fn single_transition_halts_in_one_step(
        input in "[01a ]{1,16}",
        movement in arbitrary_movement(),
    ) {
        let first = input.chars().next().unwrap().to_string();
        let rule = Instruction::new(&first, "end", movement);
        let instructions = single_rule("start", &first, rule);
        let config = MachineConfig::default();
        let mut machine =
            TuringMachine::new(&instructions, &input, "start", "end", config).unwrap();

        let result = machine.run(&mut NullObserver).unwrap();

        prop_assert_eq!(machine.step_count(), 1);
        prop_assert_eq!(result, input.replace(' ', ""));
    }

    #[test]
    fn writes_longer_than_one_character_are_rejected(write in "[01a]{2,5}") {
        let instructions = single_rule("q0", "1", Instruction::new(&write, "qdone", "right"));

        let result = validate(&instructions, "qdone", &MachineConfig::default());

        let is_invalid_write = matches!(result, Err(TuringMachineError::InvalidWrite { .. }));
        prop_assert!(is_invalid_write);
    }

    #[test]
    fn unknown_movements_are_rejected(movement in "[a-z]{1,8}") {
        prop_assume!(movement != "left" && movement != "right");
        let instructions = single_rule("q0", "1", Instruction::new("1", "qdone", &movement));

        let result = validate(&instructions, "qdone", &MachineConfig::default());

        let is_invalid_move = matches!(result, Err(TuringMachineError::InvalidMove { .. }));
        prop_assert!(is_invalid_move);
    }

    #[test]
    fn dangling_next_states_are_rejected(next_state in "q[1-9][0-9]{0,3}") {
        let instructions = single_rule("q0", "1", Instruction::new("1", &next_state, "left"));

        let config = MachineConfig::default();
        let result = TuringMachine::new(&instructions, "1", "q0", "qdone", config);

        let is_undefined_state =
            matches!(result, Err(TuringMachineError::UndefinedState { .. }));
        prop_assert!(is_undefined_state);
    }
}
