use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    DivisionByZero,
    Overflow,
    UnknownJoint(usize),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DivisionByZero => write!(f, "division by zero"),
            GeometryError::Overflow => write!(f, "result does not fit in i32"),
            GeometryError::UnknownJoint(id) => {
                write!(f, "unknown joint id: {id}. Must be in range 0-15.")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

pub type Result<T> = std::result::Result<T, GeometryError>;
