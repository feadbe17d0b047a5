use std::path::PathBuf;

use clap::Parser;
use splay_cli::Config;

#[test]
fn config_defaults_matrix() {
    let config = Config::try_parse_from(["splay-tree"]).unwrap();
    assert_eq!(config.input, None);
    if std::env::var_os(splay_cli::config::LOG_ENV).is_none() {
        assert_eq!(config.log_filter, splay_cli::config::DEFAULT_LOG_FILTER);
    }
}

#[test]
fn config_input_and_log_matrix() {
    let config =
        Config::try_parse_from(["splay-tree", "commands.txt", "--log", "splay_tree=trace"]).unwrap();
    assert_eq!(config.input, Some(PathBuf::from("commands.txt")));
    assert_eq!(config.log_filter, "splay_tree=trace");
}

#[test]
fn config_rejects_extra_positional_matrix() {
    assert!(Config::try_parse_from(["splay-tree", "a.txt", "b.txt"]).is_err());
}
