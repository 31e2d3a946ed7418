use std::error::Error;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use backtrace::Backtrace;
use serde::Serialize;
use slog::{Drain, Level, LevelFilter, Logger, error, o};

#[derive(Serialize, Debug)]
pub struct StackFrame {
    func: String,
    source: String,
    line: u32,
}

/// Captures the current backtrace as a list of frames.
fn marshal_stack() -> Vec<StackFrame> {
    let bt = Backtrace::new();
    let mut frames = Vec::new();

    for frame in bt.frames() {
        for symbol in frame.symbols() {
            let func = symbol
                .name()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".to_owned());
            let source = symbol
                .filename()
                .map(short_path)
                .unwrap_or_else(|| "unknown".to_owned());
            let line = symbol.lineno().unwrap_or(0);

            frames.push(StackFrame { func, source, line });
        }
    }
    frames
}

// Keep only the last two path components.
fn short_path(path: &Path) -> String {
    match (path.parent().and_then(|p| p.file_name()), path.file_name()) {
        (Some(parent), Some(file)) => format!("{}/{}", parent.to_string_lossy(), file.to_string_lossy()),
        _ => path.to_string_lossy().into_owned(),
    }
}

/// Joins an error and all of its sources into one line.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Builds the JSON logger. Records go to stderr so stdout stays free for samples.
pub fn get_logger(verbose: bool) -> Logger {
    let level = if verbose { Level::Debug } else { Level::Info };
    let drain = slog_json::Json::default(io::stderr()).fuse();
    let drain = Mutex::new(drain).fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("app" => "brownian-noise"))
}

/// Logs `err` with its full cause chain and a stack trace.
pub fn error_context(logger: &Logger, context: &str, err: &(dyn Error + 'static)) {
    let stack = serde_json::to_string(&marshal_stack()).unwrap_or_default();
    error!(logger, "{}", context; "error" => error_chain(err), "stack_trace" => stack);
}
