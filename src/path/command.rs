use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::{BrushError, BrushResult};

/// One absolute drawing command of a parsed path.
///
/// This is the reduced primitive set the engine consumes: move, line, quad
/// and cubic curves, and close. Commands are immutable once parsed and owned
/// by the [`Path`] they belong to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment to the given point.
    LineTo(Point),
    /// Quadratic Bezier segment.
    QuadTo {
        /// Control point.
        ctrl: Point,
        /// Segment endpoint.
        to: Point,
    },
    /// Cubic Bezier segment.
    CubicTo {
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// Segment endpoint.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    /// The on-path endpoint of this command, if it has one.
    pub fn endpoint(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::QuadTo { to, .. } | Self::CubicTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    /// Replace the on-path endpoint, leaving control points untouched.
    pub fn with_endpoint(self, p: Point) -> Self {
        match self {
            Self::MoveTo(_) => Self::MoveTo(p),
            Self::LineTo(_) => Self::LineTo(p),
            Self::QuadTo { ctrl, .. } => Self::QuadTo { ctrl, to: p },
            Self::CubicTo { ctrl1, ctrl2, .. } => Self::CubicTo { ctrl1, ctrl2, to: p },
            Self::Close => Self::Close,
        }
    }
}

/// An ordered sequence of [`PathCommand`]s representing one vector shape.
///
/// Two paths are compared and morphed by geometry, never by command-for-command
/// equality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Build a path from an already-validated command sequence.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Parse an absolute-coordinate path string (`M10,20L30,40...`).
    ///
    /// Accepts `M`, `L`, `H`, `V`, `Q`, `C` and `Z` with comma or whitespace
    /// separated coordinates, and implicit command repetition per the SVG
    /// grammar (`H`/`V` are normalized to [`PathCommand::LineTo`] while
    /// parsing). Any other command letter fails with
    /// [`BrushError::UnsupportedCommand`]; malformed numbers fail with
    /// [`BrushError::Parse`]. No partial path is produced on error.
    pub fn parse(d: &str) -> BrushResult<Self> {
        Parser::new(d).run()
    }

    /// Commands in path order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Mutable access for in-place edits (endpoint trimming, splicing).
    pub fn commands_mut(&mut self) -> &mut Vec<PathCommand> {
        &mut self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` for a path with no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromStr for Path {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", p.x, p.y)?,
                PathCommand::QuadTo { ctrl, to } => {
                    write!(f, "Q{},{},{},{}", ctrl.x, ctrl.y, to.x, to.y)?
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                    f,
                    "C{},{},{},{},{},{}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )?,
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(d: &'a str) -> Self {
        Self {
            bytes: d.as_bytes(),
            pos: 0,
        }
    }

    fn run(mut self) -> BrushResult<Path> {
        let mut commands = Vec::new();
        let mut current = Point::ZERO;
        let mut mode: Option<u8> = None;

        loop {
            self.skip_separators();
            let Some(&b) = self.bytes.get(self.pos) else {
                break;
            };

            if b.is_ascii_alphabetic() {
                self.pos += 1;
                match b {
                    b'M' => mode = Some(b),
                    b'L' | b'H' | b'V' | b'Q' | b'C' | b'Z' if commands.is_empty() => {
                        return Err(BrushError::parse("path must begin with a moveto"));
                    }
                    b'L' | b'H' | b'V' | b'Q' | b'C' => mode = Some(b),
                    b'Z' => {
                        commands.push(PathCommand::Close);
                        mode = None;
                        continue;
                    }
                    _ => {
                        return Err(BrushError::unsupported_command(format!(
                            "'{}' at byte {}",
                            char::from(b),
                            self.pos - 1
                        )));
                    }
                }
            }

            let m = mode.ok_or_else(|| {
                BrushError::parse(format!("expected command letter at byte {}", self.pos))
            })?;

            let cmd = match m {
                b'M' => {
                    let p = self.point()?;
                    // Implicit repetition after a moveto continues as lineto.
                    mode = Some(b'L');
                    PathCommand::MoveTo(p)
                }
                b'L' => PathCommand::LineTo(self.point()?),
                b'H' => {
                    let x = self.number()?;
                    PathCommand::LineTo(Point::new(x, current.y))
                }
                b'V' => {
                    let y = self.number()?;
                    PathCommand::LineTo(Point::new(current.x, y))
                }
                b'Q' => {
                    let ctrl = self.point()?;
                    let to = self.point()?;
                    PathCommand::QuadTo { ctrl, to }
                }
                b'C' => {
                    let ctrl1 = self.point()?;
                    let ctrl2 = self.point()?;
                    let to = self.point()?;
                    PathCommand::CubicTo { ctrl1, ctrl2, to }
                }
                _ => unreachable!("mode is always one of MLHVQC"),
            };
            if let Some(p) = cmd.endpoint() {
                current = p;
            }
            commands.push(cmd);
        }

        Ok(Path::from_commands(commands))
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b == b',' || b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn point(&mut self) -> BrushResult<Point> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }

    fn number(&mut self) -> BrushResult<f64> {
        self.skip_separators();
        let start = self.pos;
        if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if matches!(self.bytes.get(self.pos), Some(b'.')) {
            self.pos += 1;
            while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| BrushError::parse("non-utf8 coordinate text"))?;
        text.parse::<f64>()
            .map_err(|_| BrushError::parse(format!("expected number at byte {start}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
