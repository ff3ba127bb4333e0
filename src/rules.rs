//! This module contains the predicates for the standard Sudoku rules: no
//! digit may occur more than once in any row, column, or block.
//!
//! The central function is [check_number], which decides whether a digit
//! could be placed in a cell without breaking any rule. [check_cell] applies
//! the same test to a cell's current content and [check] validates an entire
//! grid in one pass.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::util::DigitSet;

fn check_number_row(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

fn check_number_column(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_row in 0..SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

// Cells that share the row or column with the checked one are skipped here,
// since check_number_row and check_number_column already cover them.
fn check_number_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if other_row != row && other_column != column &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Checks whether the given `number` would fit into the cell specified by
/// `column` and `row` into the `grid` without violating any rule. That is,
/// this function returns `true` if and only if no *other* cell in the same
/// row, column, or block currently holds `number`. The checked cell itself is
/// always excluded from the comparison, so re-checking a cell against its own
/// current content does not reject it.
///
/// This is a pure predicate: the grid is not changed.
///
/// # Panics
///
/// If `column` or `row` lie outside the grid.
pub fn check_number(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    check_number_row(grid, column, row, number) &&
        check_number_column(grid, column, row, number) &&
        check_number_block(grid, column, row, number)
}

/// Checks whether the cell at the given position fulfills all rules. This is
/// the same as calling [check_number] with the same coordinates and the
/// number which is actually filled in that cell. If the cell is empty, this
/// function always returns `true`.
///
/// # Panics
///
/// If `column` or `row` lie outside the grid.
pub fn check_cell(grid: &SudokuGrid, column: usize, row: usize) -> bool {
    if let Some(number) = grid.get_cell(column, row).unwrap() {
        check_number(grid, column, row, number)
    }
    else {
        true
    }
}

fn check_rows(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for row in 0..SIZE {
        set.clear();

        for column in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if !set.insert(number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

fn check_columns(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for column in 0..SIZE {
        set.clear();

        for row in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if !set.insert(number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

fn check_blocks(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for block_row in 0..BLOCK_SIZE {
        for block_column in 0..BLOCK_SIZE {
            set.clear();

            let start_column = block_column * BLOCK_SIZE;
            let start_row = block_row * BLOCK_SIZE;

            for row in start_row..(start_row + BLOCK_SIZE) {
                for column in start_column..(start_column + BLOCK_SIZE) {
                    if let Some(number) = grid.get_cell(column, row).unwrap() {
                        if !set.insert(number).unwrap() {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// Checks whether the given [SudokuGrid] matches all rules, that is, no row,
/// column, or block contains the same digit more than once among its filled
/// cells. Empty cells are permitted, so a partially filled puzzle whose clues
/// do not conflict is considered valid.
///
/// Each row, column, and block is scanned once with a
/// [DigitSet](crate::util::DigitSet), which is faster than running
/// [check_number] for every cell.
pub fn check(grid: &SudokuGrid) -> bool {
    check_rows(grid) && check_columns(grid) && check_blocks(grid)
}
