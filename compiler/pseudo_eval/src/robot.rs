//! The robot collaborator.
//!
//! Robot built-ins (`CREATE_GRID`, `MOVE_FORWARD`, ...) forward to a
//! [`Robot`] supplied through the interpreter builder. [`GridRobot`] is a
//! headless implementation over an in-memory grid; a graphical front end
//! would implement the same trait and report a closed window through
//! [`GridError::WindowClosed`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Failure reported by a robot command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid has not been created yet, call CREATE_GRID() first")]
    NotCreated,
    #[error("The grid window was closed")]
    WindowClosed,
    #[error("Robot cannot move into the wall at ({row}, {col})")]
    Blocked { row: i64, col: i64 },
    #[error("Robot cannot move out of bounds to ({row}, {col})")]
    OutOfBounds { row: i64, col: i64 },
}

/// Direction relative to the robot's heading, as accepted by `CAN_MOVE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FORWARD" => Some(Direction::Forward),
            "BACKWARD" => Some(Direction::Backward),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Absolute heading on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    Right,
    Up,
    Left,
    Down,
}

impl Heading {
    /// Quarter turn counterclockwise.
    #[must_use]
    pub fn left(self) -> Self {
        match self {
            Heading::Right => Heading::Up,
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
        }
    }

    /// Quarter turn clockwise.
    #[must_use]
    pub fn right(self) -> Self {
        match self {
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
            Heading::Up => Heading::Right,
        }
    }

    #[must_use]
    pub fn turn(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => self,
            Direction::Backward => self.left().left(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Row and column delta of one step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::Right => (0, 1),
            Heading::Up => (-1, 0),
            Heading::Left => (0, -1),
            Heading::Down => (1, 0),
        }
    }
}

/// Commands the robot built-ins forward to.
pub trait Robot {
    fn create_grid(&mut self) -> Result<(), GridError>;
    fn move_forward(&mut self) -> Result<(), GridError>;
    fn rotate_left(&mut self) -> Result<(), GridError>;
    fn rotate_right(&mut self) -> Result<(), GridError>;
    fn can_move(&self, direction: Direction) -> Result<bool, GridError>;
}

/// Handle that marks a [`GridRobot`]'s window as closed. May be used from
/// another thread while the interpreter is running.
#[derive(Clone, Debug)]
pub struct GridCloseHandle(Arc<AtomicBool>);

impl GridCloseHandle {
    pub fn close(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Headless robot on a rectangular grid with walls.
#[derive(Debug)]
pub struct GridRobot {
    rows: i64,
    cols: i64,
    walls: FxHashSet<(i64, i64)>,
    start: (i64, i64),
    position: (i64, i64),
    heading: Heading,
    created: bool,
    closed: Arc<AtomicBool>,
    delay: Option<Duration>,
}

impl GridRobot {
    /// A `rows` x `cols` grid with the robot at the top-left corner facing
    /// right.
    pub fn new(rows: i64, cols: i64) -> Self {
        GridRobot {
            rows,
            cols,
            walls: FxHashSet::default(),
            start: (0, 0),
            position: (0, 0),
            heading: Heading::Right,
            created: false,
            closed: Arc::new(AtomicBool::new(false)),
            delay: None,
        }
    }

    #[must_use]
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = (i64, i64)>) -> Self {
        self.walls.extend(walls);
        self
    }

    #[must_use]
    pub fn with_start(mut self, row: i64, col: i64) -> Self {
        self.start = (row, col);
        self.position = (row, col);
        self
    }

    /// Sleep after every command, rate-limiting a visible simulation.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn close_handle(&self) -> GridCloseHandle {
        GridCloseHandle(Arc::clone(&self.closed))
    }

    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    fn ready(&self) -> Result<(), GridError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(GridError::WindowClosed);
        }
        if !self.created {
            return Err(GridError::NotCreated);
        }
        Ok(())
    }

    fn pause(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }

    fn target(&self, heading: Heading) -> (i64, i64) {
        let (dr, dc) = heading.delta();
        (self.position.0 + dr, self.position.1 + dc)
    }

    fn check_cell(&self, (row, col): (i64, i64)) -> Result<(), GridError> {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        if self.walls.contains(&(row, col)) {
            return Err(GridError::Blocked { row, col });
        }
        Ok(())
    }
}

impl Robot for GridRobot {
    fn create_grid(&mut self) -> Result<(), GridError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(GridError::WindowClosed);
        }
        self.created = true;
        self.position = self.start;
        self.heading = Heading::Right;
        tracing::debug!(rows = self.rows, cols = self.cols, "grid created");
        Ok(())
    }

    fn move_forward(&mut self) -> Result<(), GridError> {
        self.ready()?;
        let target = self.target(self.heading);
        self.check_cell(target)?;
        self.position = target;
        tracing::trace!(row = target.0, col = target.1, "robot moved");
        self.pause();
        Ok(())
    }

    fn rotate_left(&mut self) -> Result<(), GridError> {
        self.ready()?;
        self.heading = self.heading.left();
        self.pause();
        Ok(())
    }

    fn rotate_right(&mut self) -> Result<(), GridError> {
        self.ready()?;
        self.heading = self.heading.right();
        self.pause();
        Ok(())
    }

    fn can_move(&self, direction: Direction) -> Result<bool, GridError> {
        self.ready()?;
        Ok(self.check_cell(self.target(self.heading.turn(direction))).is_ok())
    }
}
