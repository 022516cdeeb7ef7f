//! invidx CLI binary.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use invidx::cli::args::*;
use invidx::cli::commands::*;

fn main() {
    let args = InvidxArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = execute_command(&args, &mut out).and_then(|()| Ok(out.flush()?));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
