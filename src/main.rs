use clap::Parser;
use sigrun::{verify_well_formed, Signal, SignalError};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render { pattern } => run_render(&pattern),
        Commands::Probe { pattern, position } => run_probe(&pattern, position),
        Commands::Inspect { pattern } => run_inspect(&pattern),
        Commands::Insert { base, patch, position } => run_insert(&base, &patch, position),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_render(pattern: &str) -> Result<(), SignalError> {
    let signal = Signal::parse(pattern)?;
    println!("{}", signal);
    Ok(())
}

fn run_probe(pattern: &str, position: u64) -> Result<(), SignalError> {
    let signal = Signal::parse(pattern)?;
    println!("{}", signal.level_at(position)?);
    Ok(())
}

fn run_inspect(pattern: &str) -> Result<(), SignalError> {
    let signal = Signal::parse(pattern)?;
    match verify_well_formed(&signal) {
        Ok(()) => {}
        Err(violation) => eprintln!("warning: {}", violation),
    }
    match serde_json::to_string_pretty(signal.runs()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_insert(base: &str, patch: &str, position: u64) -> Result<(), SignalError> {
    let mut signal = Signal::parse(base)?;
    let patch = Signal::parse(patch)?;
    signal.insert(&patch, position)?;
    println!("{}", signal.to_bit_string());
    println!("{}", signal);
    Ok(())
}
