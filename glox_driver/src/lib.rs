//! Runs the glox scanner from the command line, either on a script file or on the lines typed
//! at an interactive prompt, and prints the scanned tokens.

use std::{
    cell::Cell,
    fmt::Display,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use glox_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use glox_lexical::{error, token_stream::TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "glox",
    about = "Scanner for the Lox scripting language.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The script to scan. Starts an interactive prompt when omitted.
    pub script: Option<PathBuf>,
}

/// The outcome of a glox run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Everything was scanned without lexical errors.
    Success,

    /// The script contains at least one lexical error.
    LexicalError,

    /// The input could not be read or the output could not be written.
    IoError,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::LexicalError => Self::from(65_u8),
            Status::IoError => Self::from(74_u8),
        }
    }
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error
/// stream and remembering whether any of them was an error.
#[derive(Debug)]
struct Printer {
    had_error: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            had_error: Cell::new(false),
        }
    }

    fn had_error(&self) -> bool { self.had_error.get() }
}

impl Handler<error::Error> for Printer {
    fn receive(&self, error: error::Error) {
        eprintln!("{error}");

        if error.severity() == Severity::Error {
            self.had_error.set(true);
        }
    }
}

fn report_io_error(subject: impl Display, error: impl Display) -> Status {
    let msg = Message::new(Severity::Error, format!("{subject}: {error}"));
    eprintln!("{msg}");

    Status::IoError
}

fn print_tokens(tokens: &TokenStream, output: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        writeln!(output, "{token}")?;
    }

    Ok(())
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    let status = match argument.script {
        Some(path) => run_file(&path, &mut io::stdout().lock()),
        None => run_prompt(io::stdin().lock(), &mut io::stdout().lock()),
    };

    status.into()
}

/// Scans the script at `path` and writes its tokens to `output`, one per line.
pub fn run_file(path: &Path, output: &mut impl Write) -> Status {
    let source_file = match SourceFile::open(path) {
        Ok(source_file) => source_file,
        Err(error) => return report_io_error(path.display(), error),
    };

    let printer = Printer::new();
    let tokens = TokenStream::tokenize(&source_file, &printer);

    if let Err(error) = print_tokens(&tokens, output) {
        return report_io_error("<stdout>", error);
    }

    if printer.had_error() {
        Status::LexicalError
    } else {
        Status::Success
    }
}

/// Reads lines from `input` until it is exhausted and writes the tokens of every line to
/// `output`.
///
/// Every line is scanned on its own, so an error on one line has no effect on the next one and
/// the prompt as a whole only fails on I/O errors.
pub fn run_prompt(mut input: impl BufRead, output: &mut impl Write) -> Status {
    let mut line = String::new();

    loop {
        line.clear();

        let read = write!(output, "> ")
            .and_then(|()| output.flush())
            .and_then(|()| input.read_line(&mut line));

        match read {
            Ok(0) => return Status::Success,
            Ok(_) => {}
            Err(error) => return report_io_error("<stdin>", error),
        }

        let source_file = SourceFile::from_string(
            line.trim_end_matches(|character: char| character == '\n' || character == '\r'),
            "<stdin>",
        );
        let printer = Printer::new();
        let tokens = TokenStream::tokenize(&source_file, &printer);

        if let Err(error) = print_tokens(&tokens, output) {
            return report_io_error("<stdout>", error);
        }
    }
}

#[cfg(test)]
mod tests;
