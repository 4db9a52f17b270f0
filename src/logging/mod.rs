//! `tracing` setup for the browser.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer and written to
//! the devtools console, one console call per event, using the console method
//! that matches the event level.
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Startup failures (missing configuration) |
//! | WARN  | Failed requests and mutations |
//! | INFO  | Completed mutations, startup |
//! | DEBUG | Cache decisions, request starts, search commits |

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub(crate) fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
pub(crate) struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = console_line(&self.buf) {
            emit(self.level, &line);
        }
    }
}

/// The text of one buffered event, without the fmt layer's trailing newline.
fn console_line(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let v = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&v),
        Level::WARN => console::warn_1(&v),
        Level::INFO => console::info_1(&v),
        Level::DEBUG => console::debug_1(&v),
        Level::TRACE => console::log_1(&v),
    }
}

// Native builds (unit tests) have no console.
#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    eprintln!("[{level}] {line}");
}
