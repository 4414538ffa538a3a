use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or loading a simulation.
///
/// The per-step collision routines never return errors: degenerate geometry is
/// skipped instead. Errors only surface at construction, configuration and I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid radius (zero, negative or not finite).
    InvalidRadius,
    /// Indicates an invalid mass value (e.g. a derived mass that is zero).
    InvalidMass,
    /// Indicates an invalid density value (zero, negative or not finite).
    InvalidDensity,
    /// Indicates an invalid time value (e.g. negative elapsed time).
    InvalidTime,
    /// A parameter outside of its legal range.
    InvalidParameter(String),
    /// A malformed line in a text input (scene or mesh file). Lines are 1-based.
    ParseError { line: usize, message: String },
    /// An I/O failure while reading or writing a file.
    Io(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius => write!(f, "Invalid radius value"),
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidDensity => write!(f, "Invalid density value"),
            PhysicsError::InvalidTime => write!(f, "Invalid time value"),
            PhysicsError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PhysicsError::ParseError { line, message } => write!(f, "Parse error on line {}: {}", line, message),
            PhysicsError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for PhysicsError {}

impl From<std::io::Error> for PhysicsError {
    fn from(err: std::io::Error) -> Self {
        PhysicsError::Io(err.to_string())
    }
}
