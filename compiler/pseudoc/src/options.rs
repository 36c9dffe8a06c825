//! Command-line arguments.

use pseudo_diagnostic::ColorMode;
use pseudo_eval::{GridRobot, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(String),
    Lex(String),
    Parse(String),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub color: ColorMode,
    pub max_call_depth: usize,
    /// Rows and columns of the robot grid; robot built-ins exist only
    /// when this is set.
    pub grid: Option<(i64, i64)>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            command: Command::Repl,
            color: ColorMode::Auto,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            grid: None,
        }
    }
}

impl Options {
    /// Parse the arguments after the program name.
    ///
    /// Flags may appear anywhere. `no_color_env` reports whether `NO_COLOR`
    /// is set; it has the same effect as `--no-color`.
    pub fn parse(args: &[String], no_color_env: bool) -> Result<Options, String> {
        let mut options = Options::default();
        if no_color_env {
            options.color = ColorMode::Never;
        }

        let mut positional = Vec::new();
        for arg in args {
            if arg == "--no-color" {
                options.color = ColorMode::Never;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                options.max_call_depth = depth
                    .parse()
                    .map_err(|_| format!("invalid value for --max-depth: '{depth}'"))?;
            } else if let Some(size) = arg.strip_prefix("--grid=") {
                options.grid = Some(
                    parse_grid(size).ok_or_else(|| format!("invalid value for --grid: '{size}'"))?,
                );
            } else if arg.starts_with('-') && !matches!(arg.as_str(), "-h" | "--help" | "-V" | "--version") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                positional.push(arg.as_str());
            }
        }

        options.command = match positional.as_slice() {
            [] => Command::Repl,
            ["help" | "--help" | "-h", ..] => Command::Help,
            ["version" | "--version" | "-V", ..] => Command::Version,
            ["run", path] => Command::Run((*path).to_string()),
            ["lex", path] => Command::Lex((*path).to_string()),
            ["parse", path] => Command::Parse((*path).to_string()),
            [command @ ("run" | "lex" | "parse")] => {
                return Err(format!("Usage: pseudo {command} <file.psd>"));
            }
            [path] if path.ends_with(".psd") => Command::Run((*path).to_string()),
            [command, ..] => return Err(format!("Unknown command: {command}")),
        };
        Ok(options)
    }

    /// Interpreter builder carrying these options.
    pub fn interpreter(&self) -> InterpreterBuilder {
        let builder = InterpreterBuilder::new().max_call_depth(self.max_call_depth);
        match self.grid {
            Some((rows, cols)) => builder.robot(GridRobot::new(rows, cols)),
            None => builder,
        }
    }
}

/// `<rows>x<cols>`, both positive.
fn parse_grid(size: &str) -> Option<(i64, i64)> {
    let (rows, cols) = size.split_once('x')?;
    let rows: i64 = rows.parse().ok()?;
    let cols: i64 = cols.parse().ok()?;
    (rows > 0 && cols > 0).then_some((rows, cols))
}
