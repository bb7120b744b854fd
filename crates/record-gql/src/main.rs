#![cfg_attr(test, allow(unused_crate_dependencies))]

use anyhow::Context;
use clap::crate_version;
use tracing_subscriber::EnvFilter;

mod args;
mod command;
mod config;

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    let config = args.config()?;

    let log_level = args.log_level.or(config.log_level).unwrap_or_default();

    // stdout carries the generated document, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.as_filter_str()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();

    let crate_version = crate_version!();
    tracing::debug!("record-gql {crate_version}, log level {log_level}");

    let metadata_path = args
        .metadata
        .as_deref()
        .or(config.metadata_path.as_deref())
        .context("no metadata snapshot given, pass --metadata or set metadata_path in the configuration")?;

    let object_metadata_items = object_metadata::from_path(metadata_path)?;

    tracing::info!(
        "loaded {} objects from {}",
        object_metadata_items.len(),
        metadata_path.display()
    );

    let query = command::render(&args.command, &object_metadata_items, config.compute_references)?;

    println!("{query}");

    Ok(())
}
