use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tally::{
    error::{Halt, SessionError},
    interpreter::{
        session::Session,
        tokenizer::{DEFAULT_PROMPT, Tokenizer},
    },
    util::logger,
};

/// tally is an interactive stack calculator: type numbers, variables and
/// operators on a line and get the result back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Text written before each line is read.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Logs evaluation details to standard error. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run<R: BufRead, W: Write>(input: R, output: W, prompt: &str) -> Result<Halt, SessionError> {
    Session::new(Tokenizer::new(input, output).with_prompt(prompt)).run()
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init(logger::verbosity_filter(args.verbose)) {
        eprintln!("{e}");
    }

    let stdout = io::stdout().lock();
    let outcome = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        run(BufReader::new(file), stdout, &args.prompt)
    } else {
        run(io::stdin().lock(), stdout, &args.prompt)
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
