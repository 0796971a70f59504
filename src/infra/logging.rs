//! File logging. The terminal is owned by the TUI, so events go to
//! `<cache_dir>/codepane/codepane.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use super::config::APP_DIR_NAME;

/// Filter directives override, e.g. `CODEPANE_LOG=codepane=debug`
pub const LOG_ENV: &str = "CODEPANE_LOG";
const LOG_FILE_NAME: &str = "codepane.log";
const DEFAULT_DIRECTIVE: &str = "codepane=info";

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|base| base.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. A second call leaves the first in place.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directive_falls_back_to_info() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        assert_eq!(
            env_filter(Some("codepane=loudest")).to_string(),
            DEFAULT_DIRECTIVE
        );
    }

    #[test]
    fn explicit_directive_is_used() {
        assert_eq!(
            env_filter(Some("codepane=debug")).to_string(),
            "codepane=debug"
        );
    }

    #[test]
    fn init_creates_log_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE_NAME);

        init_logging(&path).unwrap();

        assert!(path.exists());
    }
}
