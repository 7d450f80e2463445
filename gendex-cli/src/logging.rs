//! Logger setup: console output via env_logger, optional file tee.
//!
//! Normal output is the bare message at info level, so commands read like
//! plain console programs. Verbose mode keeps env_logger's default format
//! (timestamp, level, target) for debugging. The `--logfile` tee mirrors
//! the console filtering and strips ANSI codes so the file stays greppable.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log};

struct TeeLogger {
    console: env_logger::Logger,
    file: Option<Mutex<File>>,
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.console.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if !self.console.matches(record) {
            return;
        }
        self.console.log(record);
        if let Some(file) = &self.file {
            let plain = strip_ansi_escapes::strip_str(record.args().to_string());
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", plain);
            }
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Initialize logging from the global CLI flags.
///
/// `--quiet` raises the level to warn, `--verbose` lowers it to debug;
/// a `RUST_LOG` directive overrides both.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if !verbose {
        // Bare messages: commands produce console output, not log lines
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_default_env();
    let console = builder.build();

    let file = logfile.and_then(|path| match File::create(path) {
        Ok(f) => Some(Mutex::new(f)),
        Err(e) => {
            eprintln!("Warning: could not open logfile {}: {}", path.display(), e);
            None
        }
    });

    let max_level = console.filter();
    if log::set_boxed_logger(Box::new(TeeLogger { console, file })).is_ok() {
        log::set_max_level(max_level);
    }
}
