#![allow(dead_code)]

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;
use taskwave::cli::CliArgs;

pub use taskwave_test_utils::init_tracing;

/// Write `contents` to a temp file whose name ends in `suffix` (".toml"/".json").
pub fn request_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp request file");
    file.write_all(contents.as_bytes()).expect("write request file");
    file
}

/// Parse CLI args for `file` plus any extra flags.
pub fn args_for(file: &NamedTempFile, extra: &[&str]) -> CliArgs {
    let path = file.path().to_string_lossy().into_owned();
    let mut argv = vec!["taskwave".to_string(), "--input".to_string(), path];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::parse_from(argv)
}
