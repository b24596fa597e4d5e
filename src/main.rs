use clap::Parser;
use std::process;

use jsondelta::cli::Args;
use jsondelta::{
    create_formatter, load_document_input, load_document_stdin, sort_by_path, DeltaError, Differ,
};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), DeltaError> {
    args.validate()?;
    let config = args.load_config();

    let from = load_document_input(&args.from, args.inline, &config)?;
    let to = match &args.to {
        Some(input) => load_document_input(input, args.inline, &config)?,
        None => load_document_stdin(&config)?,
    };

    tracing::info!("computing diff");
    let mut differences = Differ::new()
        .with_max_depth(config.max_depth)
        .diff(&from, &to)?;
    if args.sort {
        differences = sort_by_path(&differences);
    }

    let formatter = create_formatter(args.format, !args.compact);
    println!("{}", formatter.format(&differences)?);

    Ok(())
}
