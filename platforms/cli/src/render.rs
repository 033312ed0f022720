//! Terminal presentation of a running machine: statistics, render mode, the tape window
//! around the head, and a symbol counter.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::debug;
use turing_machine::{Observer, Snapshot, Tape, TuringMachineError};

/// How often frames are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every step is displayed, separated by the configured delay.
    Automatic,
    /// Every step is displayed and waits for Enter.
    Interactive,
    /// Only the first and the final frame are displayed.
    None,
}

impl RenderMode {
    /// Interactive mode wins over automatic rendering.
    pub fn from_flags(render: bool, interactive: bool) -> Self {
        match (render, interactive) {
            (_, true) => RenderMode::Interactive,
            (true, false) => RenderMode::Automatic,
            (false, false) => RenderMode::None,
        }
    }

    /// Forced frames are always displayed.
    pub fn should_render(self, forced: bool) -> bool {
        forced || self != RenderMode::None
    }
}

/// An [`Observer`] drawing frames to a terminal.
pub struct TerminalRenderer<W: Write, R: BufRead> {
    out: W,
    input: R,
    mode: RenderMode,
    delay: Duration,
    clear_screen: bool,
}

impl<W: Write, R: BufRead> TerminalRenderer<W, R> {
    pub fn new(out: W, input: R, mode: RenderMode, delay: Duration) -> Self {
        Self {
            out,
            input,
            mode,
            delay,
            clear_screen: true,
        }
    }

    /// Disables the clear-screen sequence, e.g. when output is not a terminal.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) -> std::io::Result<()> {
        debug!(
            steps = snapshot.steps,
            state = snapshot.state,
            head = snapshot.head,
            mode = ?self.mode,
            "drawing frame"
        );

        if self.clear_screen {
            execute!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        }

        self.out.write_all(format_frame(snapshot, self.mode).as_bytes())?;
        self.out.flush()?;

        if self.mode == RenderMode::Interactive {
            let mut line = String::new();
            self.input.read_line(&mut line)?;
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        Ok(())
    }
}

impl<W: Write, R: BufRead> Observer for TerminalRenderer<W, R> {
    fn observe(&mut self, snapshot: &Snapshot<'_>, forced: bool) -> Result<(), TuringMachineError> {
        if !self.mode.should_render(forced) {
            return Ok(());
        }

        self.draw(snapshot)
            .map_err(|e| TuringMachineError::ObserverError(e.to_string()))
    }
}

/// Builds the full text of one frame.
pub fn format_frame(snapshot: &Snapshot<'_>, mode: RenderMode) -> String {
    let mut frame = String::new();

    frame.push_str(&format!("Steps Counter {:>7}\n", snapshot.steps));
    frame.push_str(&format!("Current State {:>7}\n", snapshot.state));
    frame.push_str(&format!("Tape Index {:>10}\n", snapshot.head));

    frame.push_str(&format_render_mode(mode));

    let visible = snapshot.config.visible_tape_length;
    let ruler = "=".repeat(visible * 2);
    frame.push_str(&format!("{ruler}▼{ruler}\n"));
    frame.push_str(&pipeify(&window(snapshot.tape, snapshot.head, visible)));
    frame.push('\n');
    frame.push_str(&format!("{ruler}▲{ruler}\n"));

    frame.push_str("Character Counter\n");
    for (symbol, count) in snapshot.tape.occurrences() {
        frame.push_str(&format!("{}x: {}\n", count, symbol));
    }

    frame
}

fn format_render_mode(mode: RenderMode) -> String {
    let mark = |active: bool| if active { "X" } else { " " };

    let interactive_message = if mode == RenderMode::Interactive {
        "(Press enter to render next step...)"
    } else {
        " "
    };
    let none_message = if mode == RenderMode::None {
        "(Please wait for results...)"
    } else {
        " "
    };

    format!(
        "Render Mode\n[{}] Automatic\n[{}] Interactive {}\n[{}] None {}\n",
        mark(mode == RenderMode::Automatic),
        mark(mode == RenderMode::Interactive),
        interactive_message,
        mark(mode == RenderMode::None),
        none_message,
    )
}

/// Returns the `2 * visible + 1` cells centered on `head`. Cells that are not materialized
/// yet show as blank.
pub fn window(tape: &Tape, head: isize, visible: usize) -> Vec<char> {
    let visible = visible as isize;
    let len = tape.len() as isize;

    (head - visible..=head + visible)
        .map(|position| {
            if (0..len).contains(&position) {
                tape[position as usize]
            } else {
                tape.blank()
            }
        })
        .collect()
}

/// Joins cells with `|`.
pub fn pipeify(cells: &[char]) -> String {
    cells
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join("|")
}
