use std::path::PathBuf;

use clap::Parser;

/// Environment variable consulted for the log filter when `--log` is absent.
pub const LOG_ENV: &str = "SPLAY_TREE_LOG";

/// Default tracing filter: stay quiet unless something goes wrong.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Splay tree driven by line-oriented commands.
///
/// Reads `add`, `set`, `search`, `min`, `max`, `delete` and `print` commands,
/// one per line, and writes each response to standard output.
#[derive(Clone, Debug, Parser)]
#[command(name = "splay-tree", version)]
pub struct Config {
    /// Command file to read; standard input when omitted.
    pub input: Option<PathBuf>,

    /// Tracing filter directive for diagnostics on standard error.
    #[arg(long = "log", env = LOG_ENV, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
