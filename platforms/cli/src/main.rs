mod render;

use clap::Parser;
use render::{RenderMode, TerminalRenderer};
use std::io;
use std::path::Path;
use std::process;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use turing_machine::{MachineConfig, ProgramLoader, TuringMachine, TuringMachineError};

/// Simulates a single-tape Turing machine described by a JSON instruction file.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(arg_required_else_help = true)]
#[clap(after_help = "EXAMPLES:
  turing-cli -i demos/binary-increment.json -t 1011 -b q0 -e qdone
  turing-cli -i demos/unary-addition.json -t 111+11 -r -s 0.1")]
struct Cli {
    /// Begin state
    #[clap(short = 'b', long = "begin", default_value = "q0")]
    begin: String,

    /// End state
    #[clap(short = 'e', long = "end", default_value = "qdone")]
    end: String,

    /// Rendering speed in seconds
    #[clap(short = 's', long = "speed", default_value_t = 0.3)]
    speed: f64,

    /// Render every step of the machine
    #[clap(short = 'r', long = "render")]
    render: bool,

    /// Interactive mode, press Enter to render the next step
    #[clap(short = 'a', long = "interactive")]
    interactive: bool,

    /// Instructions, as JSON file
    #[clap(short = 'i', long = "instructions")]
    instructions: Option<String>,

    /// Input tape
    #[clap(short = 't', long = "tape")]
    tape: Option<String>,
}

impl Cli {
    fn delay(&self) -> Duration {
        if self.speed > 0.0 {
            Duration::try_from_secs_f64(self.speed).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }

    fn render_mode(&self) -> RenderMode {
        RenderMode::from_flags(self.render, self.interactive)
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let Some((instructions, tape)) = required(&cli) else {
        println!("Instructions and tape are required");
        process::exit(1);
    };

    match run(&cli, instructions, tape) {
        Ok(result) => println!("Final result: {}", result),
        Err(e) => {
            error!(config = e.is_config_error(), "{}", e);
            eprintln!("{}", error_message(&e));
            process::exit(1);
        }
    }
}

/// Returns the instruction path and the tape, unless either is missing or empty.
fn required(cli: &Cli) -> Option<(&Path, &str)> {
    let instructions = cli.instructions.as_deref().filter(|path| !path.is_empty())?;
    let tape = cli.tape.as_deref().filter(|tape| !tape.is_empty())?;

    Some((Path::new(instructions), tape))
}

fn error_message(e: &TuringMachineError) -> String {
    if e.is_config_error() {
        format!("Configuration error: {}", e)
    } else {
        format!("Error: {}", e)
    }
}

/// Loads the instructions, builds the machine and runs it to completion.
fn run(cli: &Cli, instructions: &Path, tape: &str) -> Result<String, TuringMachineError> {
    let instructions = ProgramLoader::load_instructions(instructions)?;
    let mut machine = TuringMachine::new(
        &instructions,
        tape,
        &cli.begin,
        &cli.end,
        MachineConfig::default(),
    )?;

    let stdin = io::stdin();
    let mut renderer = TerminalRenderer::new(
        io::stdout(),
        stdin.lock(),
        cli.render_mode(),
        cli.delay(),
    )
    .with_clear_screen(atty::is(atty::Stream::Stdout));

    machine.run(&mut renderer)
}

/// Logs go to stderr so they never interleave with rendered frames on stdout.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}
