//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing Sudoku grids, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a grid cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if they are greater than or equal to
    /// 9.
    OutOfBounds,

    /// Indicates that a puzzle given to a solver already violates the
    /// uniqueness rules among its clues, that is, some row, column, or block
    /// contains the same digit twice before the search has even started. Such
    /// a puzzle is rejected up front instead of being reported as unsolvable.
    InvalidPuzzle
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range [1, 9]"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            SudokuError::InvalidPuzzle =>
                write!(f, "puzzle clues violate the uniqueness rules")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81, the number of cells of a 9x9 grid.
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell content is not a number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell number outside the range [1, 9]")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
