use std::io::BufRead;

use anyhow::Context;
use clap::Parser;
use dsnaming_core::{NamingContext, flatten, parse_naming_context};

mod logging;
mod render;

use render::{OutputFormat, render};

#[derive(Parser, Debug)]
#[command(name = "ncparse")]
#[command(about = "Parse directory naming-context descriptors")]
struct NcparseArgs {
    /// Descriptors such as `<GUID=...>;<SID=...>;DC=example,DC=com`
    descriptors: Vec<String>,

    /// Also read descriptors from stdin, one per line
    #[arg(long, default_value_t = false)]
    stdin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Fields)]
    format: OutputFormat,

    /// Log discarded segments to stderr (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    let args = NcparseArgs::parse();
    logging::init_tracing(args.verbose);

    let mut descriptors = args.descriptors;
    if args.stdin {
        for line in std::io::stdin().lock().lines() {
            descriptors.push(line.context("failed to read descriptor from stdin")?);
        }
    }
    tracing::debug!(count = descriptors.len(), "[ncparse] Parsing descriptors");

    let contexts: Vec<NamingContext> =
        descriptors.iter().map(|raw| parse_naming_context(raw)).collect();
    println!("{}", render(flatten(contexts), args.format)?);

    Ok(())
}
