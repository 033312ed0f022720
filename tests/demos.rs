//! Runs the instruction documents shipped in `demos/` end to end.

use turing_machine::{
    MachineConfig, NullObserver, Observer, ProgramLoader, Snapshot, Step, TuringMachine,
    TuringMachineError,
};

const BINARY_INCREMENT: &str = include_str!("../demos/binary-increment.json");
const UNARY_ADDITION: &str = include_str!("../demos/unary-addition.json");
const INVERT: &str = include_str!("../demos/invert.json");

fn machine(document: &str, tape: &str) -> TuringMachine {
    let instructions = ProgramLoader::load_instructions_from_string(document).unwrap();
    TuringMachine::new(&instructions, tape, "q0", "qdone", MachineConfig::default()).unwrap()
}

fn run(document: &str, tape: &str) -> String {
    machine(document, tape).run(&mut NullObserver).unwrap()
}

#[test]
fn test_binary_increment() {
    assert_eq!(run(BINARY_INCREMENT, "1011"), "1100");
    assert_eq!(run(BINARY_INCREMENT, "0"), "1");
    assert_eq!(run(BINARY_INCREMENT, "1001"), "1010");
}

#[test]
fn test_binary_increment_carries_past_left_edge() {
    let mut machine = machine(BINARY_INCREMENT, "111");

    let result = machine.run(&mut NullObserver).unwrap();

    assert_eq!(result, "1000");
    assert_eq!(machine.head(), -1);
    assert_eq!(machine.tape().contents(), "1000 ");
}

#[test]
fn test_unary_addition() {
    assert_eq!(run(UNARY_ADDITION, "111+11"), "11111");
    assert_eq!(run(UNARY_ADDITION, "1+1"), "11");
}

#[test]
fn test_invert() {
    assert_eq!(run(INVERT, "1010"), "0101");
    assert_eq!(run(INVERT, "1"), "0");
}

#[test]
fn test_invert_rejects_unknown_symbol() {
    let mut machine = machine(INVERT, "10x1");

    let result = machine.run(&mut NullObserver);

    assert_eq!(
        result,
        Err(TuringMachineError::UndefinedTransition("q0".to_string(), 'x'))
    );
    assert_eq!(machine.step_count(), 2);
}

#[test]
fn test_scan_right_scenario() {
    let document = r#"{"q0": {
        "0": {"write": "0", "nextState": "qdone", "move": "right"},
        "1": {"write": "1", "nextState": "q0", "move": "right"}
    }}"#;
    let mut machine = machine(document, "101");

    assert_eq!(machine.step(), Ok(Step::Continue));
    assert_eq!(machine.state(), "q0");
    assert_eq!(machine.step(), Ok(Step::Halt));
    assert_eq!(machine.state(), "qdone");
    assert_eq!(machine.result(), "101");
}

#[test]
fn test_demo_report_sequence() {
    struct Counter {
        forced: usize,
        unforced: usize,
        last_steps: usize,
    }

    impl Observer for Counter {
        fn observe(
            &mut self,
            snapshot: &Snapshot<'_>,
            forced: bool,
        ) -> Result<(), TuringMachineError> {
            if forced {
                self.forced += 1;
            } else {
                self.unforced += 1;
            }
            self.last_steps = snapshot.steps;
            Ok(())
        }
    }

    let mut counter = Counter {
        forced: 0,
        unforced: 0,
        last_steps: 0,
    };
    let mut machine = machine(BINARY_INCREMENT, "1011");

    machine.run(&mut counter).unwrap();

    assert_eq!(counter.forced, 2);
    assert_eq!(counter.unforced, machine.step_count());
    assert_eq!(counter.last_steps, machine.step_count());
    assert_eq!(machine.step_count(), 8);
}
