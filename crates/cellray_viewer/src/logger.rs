use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use log::LevelFilter;

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
fn default_level(to_file: bool) -> LevelFilter {
    if to_file {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the logger, optionally writing to a file instead of stderr.
pub fn init_logger(level: Option<LevelFilter>, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    match level {
        Some(level) => {
            builder.filter_level(level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(default_level(log_file.is_some()));
        }
        None => {}
    }

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Info);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }
}
