use thiserror::Error as ThisError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("Invalid characters in puzzle")]
    InvalidCharacters,
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,
    #[error("Required field(s) missing")]
    MissingFields,
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    #[error("Invalid value")]
    InvalidValue,
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}
