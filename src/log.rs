// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the subscriber: `.store/debug.log`, or stderr if that can't be
/// opened. Safe to call more than once.
/// `RUST_LOG` overrides the default `barselector=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("barselector=info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false);

        match open_log(Path::new(STORE_DIR)) {
            Ok(file) => {
                let _ = builder.with_writer(Mutex::new(file)).with_ansi(false).try_init();
            }
            Err(e) => {
                eprintln!("barselector: cannot open {}/{} ({e}); logging to stderr", STORE_DIR, LOG_FILE);
                let _ = builder.with_writer(io::stderr).try_init();
            }
        }
    });
}

/// Open `<dir>/debug.log` for appending, creating `dir` as needed.
pub fn open_log(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new().create(true).append(true).open(dir.join(LOG_FILE))
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_creates_dir_and_appends() {
        let dir = std::env::temp_dir().join("barselector_log_ok");
        let _ = fs::remove_dir_all(&dir);
        assert!(open_log(&dir).is_ok());
        assert!(dir.join(LOG_FILE).is_file());
        assert!(open_log(&dir).is_ok());
    }

    #[test]
    fn open_log_fails_when_dir_is_a_file() {
        let blocker = std::env::temp_dir().join("barselector_log_blocker");
        let _ = fs::remove_dir_all(&blocker);
        fs::write(&blocker, "not a dir").unwrap();
        assert!(open_log(&blocker).is_err());
    }
}
