use std::fs::File;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum Sink {
    Stdout,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Sink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format_line(message);
        match &self.sink {
            Sink::Stdout => println!("{}", line),
            Sink::File(file) => {
                // A poisoned lock only means another log call panicked mid-write.
                let mut file = file.lock().unwrap_or_else(|e| e.into_inner());
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, Sink::Stdout));
}

/// Routes log lines to `path` instead of stdout. Used by boards that draw on
/// the terminal themselves.
pub fn init_file_logger(prefix: Option<String>, path: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    LOGGER.get_or_init(|| Logger::new(prefix, Sink::File(Mutex::new(file))));
    Ok(())
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
