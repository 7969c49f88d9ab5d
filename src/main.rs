use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use range_facade::algorithm;
use range_facade::{ForwardCounter, RandomAccessCounter, View};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "range-facade", about = "Lazy integer sequences over capability-tagged cursors")]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. `debug`, `range_facade=trace`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every value of `0..bound`, one per line.
    Print {
        /// Exclusive upper limit; negative means empty.
        #[arg(allow_hyphen_values = true)]
        bound: i64,
        /// Cursor capability of the counter.
        #[arg(long, value_enum, default_value_t = Capability::Forward)]
        capability: Capability,
        /// Print from the back (requires random access).
        #[arg(long)]
        reverse: bool,
    },
    /// Print the number of values and how it was computed.
    Len {
        /// Exclusive upper limit; negative means empty.
        #[arg(allow_hyphen_values = true)]
        bound: i64,
        /// Cursor capability of the counter.
        #[arg(long, value_enum, default_value_t = Capability::Forward)]
        capability: Capability,
    },
    /// Binary-search a value in `0..bound`.
    Search {
        /// Exclusive upper limit; negative means empty.
        #[arg(allow_hyphen_values = true)]
        bound: i64,
        /// Value to look for.
        #[arg(allow_hyphen_values = true)]
        value: i64,
        /// Cursor capability of the counter.
        #[arg(long, value_enum, default_value_t = Capability::Forward)]
        capability: Capability,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Capability {
    Forward,
    RandomAccess,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Print {
            bound,
            capability,
            reverse,
        } => run_print(&mut out, bound, capability, reverse)?,
        Commands::Len { bound, capability } => run_len(&mut out, bound, capability)?,
        Commands::Search {
            bound,
            value,
            capability,
        } => run_search(&mut out, bound, value, capability)?,
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{}'", default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_print<W: Write>(out: &mut W, bound: i64, capability: Capability, reverse: bool) -> Result<()> {
    match capability {
        Capability::Forward => {
            if reverse {
                bail!("reverse traversal requires --capability random-access");
            }
            let counter = ForwardCounter::new(bound);
            debug!(%counter, "printing");
            write_values(out, counter)
        }
        Capability::RandomAccess => {
            let counter = RandomAccessCounter::new(bound);
            debug!(%counter, reverse, "printing");
            if reverse {
                write_values(out, counter.into_iter().rev())
            } else {
                write_values(out, counter)
            }
        }
    }
}

fn write_values<W, I>(out: &mut W, values: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = i64>,
{
    for value in values {
        writeln!(out, "{}", value).context("failed to write value")?;
    }
    Ok(())
}

fn run_len<W: Write>(out: &mut W, bound: i64, capability: Capability) -> Result<()> {
    let (len, category) = match capability {
        Capability::Forward => {
            let counter = ForwardCounter::new(bound);
            (algorithm::size(&counter), counter.category())
        }
        Capability::RandomAccess => {
            let counter = RandomAccessCounter::new(bound);
            (algorithm::size(&counter), counter.category())
        }
    };

    let strategy = if category.is_random_access() {
        "distance"
    } else {
        "walk"
    };
    writeln!(out, "{}\t({} cursor, {})", len, category, strategy).context("failed to write length")?;
    Ok(())
}

fn run_search<W: Write>(out: &mut W, bound: i64, value: i64, capability: Capability) -> Result<()> {
    let result = match capability {
        Capability::Forward => algorithm::binary_search(&ForwardCounter::new(bound), &value),
        Capability::RandomAccess => {
            algorithm::binary_search(&RandomAccessCounter::new(bound), &value)
        }
    };

    match result {
        Ok(index) => writeln!(out, "found at {}", index),
        Err(index) => writeln!(out, "insert at {}", index),
    }
    .context("failed to write search result")?;
    Ok(())
}
