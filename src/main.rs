use anyhow::Result;

use golf_rankings::cli::Command;
use golf_rankings::{
    handle_completions, handle_extend, handle_patch, handle_scrape, handle_serve, handle_show, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Scrape => handle_scrape(),
        Command::Patch {
            source,
            file,
            create,
            note,
        } => handle_patch(source, &file, create, note),
        Command::Extend { source, file, note } => handle_extend(source, &file, note),
        Command::Show => handle_show(),
        Command::Serve { port } => handle_serve(port),
        Command::Completions { shell } => handle_completions(shell),
    }
}
