use std::{fs, io, path::PathBuf};

use clap::Parser;
use ggscript::run_program;

/// ggscript is a tiny, easy to use imperative scripting language with
/// integers, strings, loops, and functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script file to execute.
    #[arg(default_value = "script.gg")]
    script: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.script.display());
        std::process::exit(1);
    });

    let stdout = io::stdout();
    if let Err(e) = run_program(&source, &mut stdout.lock()) {
        eprintln!("{e}");
    }
}
