use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::SourceId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Golf rankings scraper (OWGR, Data Golf, FedEx Cup)")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Scrape every source and overwrite the rankings snapshot
    Scrape,
    /// Replace one source's list with a corrected JSON list
    Patch {
        /// Source to replace
        #[arg(short, long, value_enum)]
        source: SourceId,
        /// JSON array of {rank, player, points|rating} entries
        #[arg(short, long)]
        file: PathBuf,
        /// Create the source when the snapshot lacks it
        #[arg(long)]
        create: bool,
        /// Provenance text written to the snapshot
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Append entries to one source's list
    Extend {
        #[arg(short, long, value_enum)]
        source: SourceId,
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Print the summary of the current snapshot
    Show,
    /// Serve the rankings page and snapshot over HTTP
    Serve {
        /// Port number (optional, defaults to the first free of 8080, 8081, 8082, 8000, 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
