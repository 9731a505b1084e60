use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use memdb::{Error, Executed, MetaCommand, Table, execute, prepare};
use tracing_subscriber::{EnvFilter, fmt};

/// In-memory row store with a line-oriented prompt
#[derive(Parser, Debug)]
#[command(name = "memdb")]
#[command(version)]
struct Args {
    /// Log filter, e.g. "debug" or "memdb=trace" (overrides RUST_LOG)
    #[arg(short, long)]
    log_level: Option<String>,
}

struct InputBuffer {
    buffer: String,
    raw: Vec<u8>,
}

impl InputBuffer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            raw: Vec::new(),
        }
    }

    /// Reads one line, dropping only its line terminator. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    /// Running out of input counts as a read failure.
    fn read_input(&mut self, input: &mut impl BufRead) -> memdb::Result<()> {
        self.raw.clear();
        if input.read_until(b'\n', &mut self.raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }

        let line = String::from_utf8_lossy(&self.raw);
        self.buffer.clear();
        self.buffer.push_str(line.trim_end_matches(['\n', '\r']));
        Ok(())
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .init();
}

fn print_prompt() -> io::Result<()> {
    print!("db > ");
    io::stdout().flush()
}

/// Prepares and executes one statement, writing its output to `out`.
fn run_statement(line: &str, table: &mut Table, out: &mut impl Write) -> memdb::Result<()> {
    let Some(statement) = prepare(line)? else {
        return Ok(());
    };

    match execute(&statement, table)? {
        Executed::Inserted => {}
        Executed::Selected(rows) => {
            for row in rows {
                writeln!(out, "{row}")?;
            }
        }
    }
    writeln!(out, "Executed.")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut input_buffer = InputBuffer::new();
    let mut table = Table::new();
    let mut stdin = io::stdin().lock();

    loop {
        let read = print_prompt()
            .map_err(Error::from)
            .and_then(|_| input_buffer.read_input(&mut stdin));
        if let Err(err) = read {
            eprintln!("Error reading input: {err}");
            return ExitCode::FAILURE;
        }
        let line = input_buffer.buffer.as_str();

        match MetaCommand::parse(line) {
            Some(MetaCommand::Exit) => {
                println!("Bye!");
                return ExitCode::SUCCESS;
            }
            Some(MetaCommand::Unrecognized) => {
                println!("Unrecognized command: '{line}'.");
                continue;
            }
            None => {}
        }

        match run_statement(line, &mut table, &mut io::stdout().lock()) {
            Ok(()) => {}
            Err(Error::Io(err)) => {
                eprintln!("Error writing output: {err}");
                return ExitCode::FAILURE;
            }
            Err(err) => println!("{err}"),
        }
    }
}
