mod input;
mod progress;

use crate::input::{open_input, read_hostnames, InputError};
use crate::progress::Bar;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{info, LevelFilter};
use querying::resolver::Resolver;
use querying::{Coordinator, ResolveOptions, DEFAULT_CONCURRENCY};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Resolve hostnames to unique, sorted IPv4 addresses, \
skipping hostnames that are aliases (CNAME) for another domain")]
#[command(after_help = "Examples:\n  cnay -l hostnames.txt\n  echo 'www.example.com' | cnay\n  cnay -r -l hostnames.txt")]
struct Args {
    /// Path to the file containing the list of hostnames. Reads stdin when omitted
    #[arg(short, long)]
    list: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Show original hostname in brackets
    #[arg(short = 'r', long, default_value_t = false)]
    show_hostname: bool,

    /// Enable progress bar
    #[arg(long = "pb", default_value_t = false)]
    progress_bar: bool,

    /// Maximum hostnames resolved concurrently
    #[arg(short, long, env = "CNAY_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

impl Args {
    fn to_resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            annotate: self.show_hostname,
            concurrency: self.concurrency,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(if args.debug { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    let reader = match open_input(args.list.as_deref()) {
        Ok(reader) => reader,
        Err(InputError::Missing) => {
            Args::command().print_help()?;
            return Err(InputError::Missing.into());
        }
        Err(e) => return Err(e.into()),
    };
    let hostnames = read_hostnames(reader);
    info!("Resolving {} hostnames with {} concurrent lookups...", hostnames.len(), args.concurrency);

    let mut coordinator = Coordinator::new(Resolver::new(), args.to_resolve_options());
    if args.progress_bar && !args.debug {
        coordinator = coordinator.with_progress(Arc::new(Bar::new()?));
    }

    for line in coordinator.resolve_all(&hostnames).await {
        println!("{}", line);
    }
    Ok(())
}
