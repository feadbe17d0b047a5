//! `splay-tree` — drive a splay tree with line-oriented commands.
//!
//! Usage:
//!   splay-tree [INPUT] [--log FILTER]
//!
//! Commands are read from INPUT, or from stdin when it is omitted.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::Context;
use clap::Parser;
use splay_cli::{logging, Config, Dispatcher};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config.log_filter);
    tracing::info!(input = ?config.input, "starting session");

    let mut dispatcher = Dispatcher::new();
    let mut output = BufWriter::new(io::stdout().lock());
    let processed = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            dispatcher.run(BufReader::new(file), &mut output)
        }
        None => dispatcher.run(io::stdin().lock(), &mut output),
    }
    .context("failed to process commands")?;

    tracing::info!(processed, nodes = dispatcher.tree().len(), "session finished");
    Ok(())
}
