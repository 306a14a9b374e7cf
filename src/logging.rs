//! Logger setup.
//!
//! The game owns the terminal, so stderr output would scribble over the
//! frame. With `GRIDHOP_LOG_FILE` set, records are piped to that file at
//! `info` unless `RUST_LOG` says otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Config;

pub fn init(config: &Config) -> Result<()> {
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_default_env(),
    };

    // A logger may already be installed (tests, embedding); keep it.
    let _ = builder.try_init();
    Ok(())
}
