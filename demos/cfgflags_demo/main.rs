//! # cfgflags demo application
//!
//! A small CLI that registers a handful of flags, fills the ones not given on
//! the command line from an INI file, and prints where each value came from.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example cfgflags_demo
//! cargo run --example cfgflags_demo -- --port 9000
//! RUST_LOG=cfgflags=debug cargo run --example cfgflags_demo -- --config demo.ini
//! ```
//!
//! Without `--config` the demo reads `cfgflags-demo.ini` from the working
//! directory. When that file does not exist it prints a template you can save
//! there and edit.

use std::path::Path;
use std::process::ExitCode;

use cfgflags::{CfgFlagsError, FlagSet, generate_template};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILE: &str = "cfgflags-demo.ini";

fn demo_flags() -> Result<FlagSet, CfgFlagsError> {
    let mut flags = FlagSet::new("cfgflags-demo");
    flags
        .define("host", "localhost", "Address to listen on.")?
        .define("port", 8080, "Port to listen on.")?
        .define("workers", 4u64, "Number of worker threads.")?
        .define("verbose", false, "Print extra output.")?
        .define("greeting", "hello", "Text printed at startup.")?
        .define("sample-rate", 0.1, "Fraction of requests to trace.")?;
    Ok(flags)
}

fn run() -> Result<(), CfgFlagsError> {
    let mut flags = demo_flags()?;
    flags.parse_from(std::env::args_os())?;

    if flags.config_path().is_empty() && !Path::new(DEFAULT_FILE).exists() {
        println!("; no {DEFAULT_FILE} in the working directory, template follows");
        print!("{}", generate_template(&flags));
        return Ok(());
    }

    flags.apply(DEFAULT_FILE)?;

    let width = flags.iter().map(|f| f.name().len()).max().unwrap_or(0);
    for flag in flags.iter() {
        let origin = if flags.is_set(flag.name()) {
            "command line"
        } else if flag.value() != flag.default_value() {
            "config file"
        } else {
            "default"
        };
        println!(
            "{:<width$}  {:<16}  ({origin})",
            flag.name(),
            flag.value().to_string()
        );
    }

    if flags.get_bool("verbose") == Some(true) {
        println!();
        println!("{}", flags.get_str("greeting").unwrap_or_default());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CfgFlagsError::Args(e)) => e.exit(),
        Err(e) => {
            eprintln!("cfgflags-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
