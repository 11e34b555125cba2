use anyhow::Context;
use cell_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    let input_path = args.input_path.display().to_string();

    let result = commands::run(args)
        .with_context(|| format!("Failed to process phone dataset '{}'", input_path));

    match result {
        Ok(outcome) if outcome.source_available => {
            // Report already printed by the command
            process::exit(0);
        }
        Ok(_) => {
            // Source error was reported once and an empty report printed
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
