//! Where `PRINT` and `CLEAR` send their output.
//!
//! The CLI writes to stdout; tests capture into a buffer. Enum dispatch
//! keeps the hot `PRINT` path free of vtable calls.

use std::io::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        print!("{msg}");
        let _ = std::io::stdout().flush();
    }

    pub fn clear_screen(&self) {
        self.print(CLEAR_SCREEN);
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Clear the terminal, or the captured buffer standing in for it.
    pub fn clear_screen(&self) {
        match self {
            Self::Stdout(h) => h.clear_screen(),
            Self::Buffer(h) => h.clear(),
            Self::Silent => {}
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
