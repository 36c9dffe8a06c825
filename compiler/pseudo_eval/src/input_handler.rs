//! Where `INPUT` and `INPUT_INT` read lines from.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads lines from stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
        }
    }
}

/// Replays a fixed list of lines.
#[derive(Default)]
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.lines.lock().len()
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
}

impl InputHandlerImpl {
    /// Next line without its terminator, or `None` once input is exhausted.
    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => h.read_line(),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(lines)))
}
