//! # threadstats CLI
//!
//! Command-line interface for the threadstats library.

use std::process;
use std::time::Instant;

use clap::Parser;

use threadstats::cli::Args;
use threadstats::prelude::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    println!("threadstats v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:    {}", args.input.display());
    println!("Stats:    {}", args.stats_output.display());
    println!("Messages: {}", args.messages_output.display());
    println!();

    let parse_start = Instant::now();
    let report = parse_file(&args.input)?;
    let parse_time = parse_start.elapsed();

    println!(
        "Parsed {} messages from {} participants ({:.2}s)",
        report.totals().messages,
        report.stats.participants().len(),
        parse_time.as_secs_f64()
    );
    println!("{} messages received reactions", report.reacted.len());

    write_reports(&report, &args.stats_output, &args.messages_output)?;

    println!();
    println!(
        "Done. Reports saved to {} and {}",
        args.stats_output.display(),
        args.messages_output.display()
    );

    Ok(())
}
