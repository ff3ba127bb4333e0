// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand engine for classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and individual entries according to the
//! standard rules
//! * Solving Sudoku in place using a backtracking algorithm
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a Sudoku code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a Sudoku in a clearer manner. An example of how to parse and
//! display a Sudoku grid is provided below.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     7,8, ,4, , ,1,2, ,\
//!     6, , , ,7,5, , ,9,\
//!      , , ,6, ,1, ,7,8,\
//!      , ,7, ,4, ,2,6, ,\
//!      , ,1, ,5, ,9,3, ,\
//!     9, ,4, ,6, , , ,5,\
//!      ,7, ,3, , , ,1,2,\
//!     1,2, , , ,7,4, , ,\
//!      ,4,9,2, ,6, , ,7").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! The [rules] module contains predicates for the standard Sudoku rules: no
//! digit may repeat within a row, a column, or one of the nine 3x3 blocks.
//! It is possible to check an entire grid, an individual cell, or a potential
//! entry for a cell that does not require changing the grid's state.
//!
//! ```
//! use sudoku_classic::{SudokuGrid, rules};
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 4).unwrap();
//!
//! // Another 4 in the same row is not allowed ...
//! assert!(!rules::check_number(&grid, 5, 0, 4));
//!
//! // ... but a different digit is fine.
//! assert!(rules::check_number(&grid, 5, 0, 3));
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku grids. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which fills
//! the grid in place and reports whether a solution was found.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver::{BacktrackingSolver, Solver};
//!
//! let mut grid = SudokuGrid::parse("\
//!     7,8, ,4, , ,1,2, ,\
//!     6, , , ,7,5, , ,9,\
//!      , , ,6, ,1, ,7,8,\
//!      , ,7, ,4, ,2,6, ,\
//!      , ,1, ,5, ,9,3, ,\
//!     9, ,4, ,6, , , ,5,\
//!      ,7, ,3, , , ,1,2,\
//!     1,2, , , ,7,4, , ,\
//!      ,4,9,2, ,6, , ,7").unwrap();
//!
//! assert!(BacktrackingSolver.solve(&mut grid).unwrap());
//! assert!(grid.is_full());
//! ```
//!
//! The solver rejects grids whose clues already violate the rules with
//! [SudokuError::InvalidPuzzle](error::SudokuError::InvalidPuzzle) before the
//! search begins. An unsolvable but consistent puzzle is not an error: the
//! solver returns `Ok(false)` and leaves the grid unchanged.

pub mod error;
pub mod rules;
pub mod solver;
pub mod util;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of a Sudoku grid, i.e. the number of cells in each
/// row, column, and block.
pub const SIZE: usize = 9;

/// The width and height of one of the nine square blocks that partition the
/// grid.
pub const BLOCK_SIZE: usize = 3;

/// A Sudoku grid is a square of 9x9 cells, organized into nine 3x3 blocks.
/// Each cell may or may not be occupied by a digit from 1 to 9.
///
/// `SudokuGrid` implements `Display` for a pretty print such as the one
/// below, where a thick separator is inserted after every third row and
/// column.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║ 1 │ 2 │ 3 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 7 │ 8 │ 9 ║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ...
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid, i.e. one in which every cell is
    /// empty.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SIZE * SIZE]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `1, ,2, , ,3, ,4, ,` followed by 72 further entries will parse to a
    /// grid whose first row contains a 1, a 2, a 3, and a 4 in the first,
    /// third, sixth, and eighth cell.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != SIZE * SIZE {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Creates a grid from a 9x9 array of integer values, where `values[r]`
    /// holds the cells of row `r` from left to right. A value of 0 denotes an
    /// empty cell and the values 1 to 9 denote a filled one. This is the most
    /// convenient constructor for hardcoded puzzles.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let grid = SudokuGrid::from_values([
    ///     [7, 8, 0, 4, 0, 0, 1, 2, 0],
    ///     [6, 0, 0, 0, 7, 5, 0, 0, 9],
    ///     [0, 0, 0, 6, 0, 1, 0, 7, 8],
    ///     [0, 0, 7, 0, 4, 0, 2, 6, 0],
    ///     [0, 0, 1, 0, 5, 0, 9, 3, 0],
    ///     [9, 0, 4, 0, 6, 0, 0, 0, 5],
    ///     [0, 7, 0, 3, 0, 0, 0, 1, 2],
    ///     [1, 2, 0, 0, 0, 7, 4, 0, 0],
    ///     [0, 4, 9, 2, 0, 6, 0, 0, 7]
    /// ]).unwrap();
    ///
    /// assert_eq!(Some(7), grid.get_cell(0, 0).unwrap());
    /// assert_eq!(None, grid.get_cell(2, 0).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// If any value is greater than 9. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn from_values(values: [[usize; SIZE]; SIZE])
            -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for (row, row_values) in values.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value == 0 {
                    continue;
                }

                if value > SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                grid.cells[index(column, row)] = Some(value);
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Finds the first empty cell of this grid in row-major order, that is,
    /// the topmost row is scanned left-to-right first, then the next row, and
    /// so on. The result is returned in the form `Some((column, row))`, or
    /// `None` if every cell is filled.
    ///
    /// The scan order is part of this method's contract, since it determines
    /// the order in which a solver fills the grid and thereby which solution
    /// is found for puzzles that have several.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    /// assert_eq!(Some((0, 0)), grid.first_empty_cell());
    ///
    /// grid.set_cell(0, 0, 1).unwrap();
    /// assert_eq!(Some((1, 0)), grid.first_empty_cell());
    /// ```
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if self.cells[index(column, row)].is_none() {
                    return Some((column, row));
                }
            }
        }

        None
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> Result<SudokuGrid, SudokuParseError> {
        SudokuGrid::parse(code.as_str())
    }
}
