pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extraction;
pub mod fetchers;
pub mod http;
pub mod normalization;
pub mod ranking;
pub mod services;
pub mod snapshot;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::{RunSummary, SourceId};
use crate::services::{CorrectionMode, CorrectionService, ScrapeService, ServerService};
use crate::snapshot::{PatchPolicy, SnapshotStore};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_scrape() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ScrapeService::new(config)?;
        service.run().await.map(|_| ())
    })
}

pub fn handle_patch(source: SourceId, file: &Path, create: bool, note: Option<String>) -> Result<()> {
    let policy = if create {
        PatchPolicy::CreateOrReplace
    } else {
        PatchPolicy::ReplaceExisting
    };
    run_correction(source, file, CorrectionMode::Replace(policy), note)
}

pub fn handle_extend(source: SourceId, file: &Path, note: Option<String>) -> Result<()> {
    run_correction(source, file, CorrectionMode::Extend, note)
}

pub fn handle_show() -> Result<()> {
    let config = AppConfig::new();
    let snapshot = SnapshotStore::new(&config.snapshot.path).load()?;
    RunSummary::new(&snapshot.source, &snapshot).print();
    Ok(())
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn run_correction(source: SourceId, file: &Path, mode: CorrectionMode, note: Option<String>) -> Result<()> {
    let config = AppConfig::new();
    let service = CorrectionService::new(SnapshotStore::new(&config.snapshot.path));
    service.run(source, file, mode, note).map(|_| ())
}
