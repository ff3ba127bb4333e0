//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::SudokuGrid;
use crate::error::{SudokuError, SudokuResult};
use crate::rules;

/// A trait for structs which have the ability to solve Sudoku. Solvers work
/// on the grid in place: a successful solve leaves the grid fully filled,
/// while a failed one must leave it exactly as it was before the call.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku grid in place.
    /// `Ok(true)` indicates that the grid now holds a complete, valid
    /// solution. `Ok(false)` indicates that no solution exists; in that case
    /// the grid is unchanged. An unsolvable puzzle is a normal outcome, not
    /// an error.
    ///
    /// # Errors
    ///
    /// If the clues of the given grid already violate the rules, solvers
    /// shall return `SudokuError::InvalidPuzzle` without starting the search,
    /// rather than reporting such a puzzle as unsolvable.
    fn solve(&self, grid: &mut SudokuGrid) -> SudokuResult<bool>;
}

/// A perfect [Solver](trait.Solver.html) which solves Sudoku by recursively
/// testing all valid digits for each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// puzzle has many missing digits.
/// * It finds a solution for every solvable puzzle.
///
/// Cells are filled in row-major order and digits are tried in ascending
/// order, so for puzzles with more than one solution the result is the
/// lexicographically first one, and repeated runs on the same input always
/// produce the same output.
///
/// ```
/// use sudoku_classic::SudokuGrid;
/// use sudoku_classic::solver::{BacktrackingSolver, Solver};
///
/// let mut grid = SudokuGrid::parse("\
///      , , , ,8,1, , , ,\
///      , ,2, , ,7,8, , ,\
///      ,5,3, , , ,1,7, ,\
///     3,7, , , , , , , ,\
///     6, , , , , , , ,3,\
///      , , , , , , ,2,4,\
///      ,6,9, , , ,2,3, ,\
///      , ,5,9, , ,4, , ,\
///      , , ,6,5, , , , ").unwrap();
///
/// assert!(BacktrackingSolver.solve(&mut grid).unwrap());
/// assert!(grid.is_full());
/// ```
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid) -> bool {
        if let Some((column, row)) = grid.first_empty_cell() {
            for number in 1..=9 {
                if rules::check_number(grid, column, row, number) {
                    grid.set_cell(column, row, number).unwrap();

                    if BacktrackingSolver::solve_rec(grid) {
                        return true;
                    }

                    grid.clear_cell(column, row).unwrap();
                }
            }

            false
        }
        else {
            true
        }
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut SudokuGrid) -> SudokuResult<bool> {
        if !rules::check(grid) {
            return Err(SudokuError::InvalidPuzzle);
        }

        Ok(BacktrackingSolver::solve_rec(grid))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn full_grid() -> SudokuGrid {
        SudokuGrid::from_values([
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 4, 5, 6, 7, 8, 9, 1],
            [5, 6, 7, 8, 9, 1, 2, 3, 4],
            [8, 9, 1, 2, 3, 4, 5, 6, 7],
            [3, 4, 5, 6, 7, 8, 9, 1, 2],
            [6, 7, 8, 9, 1, 2, 3, 4, 5],
            [9, 1, 2, 3, 4, 5, 6, 7, 8]
        ]).unwrap()
    }

    fn classic_puzzle() -> SudokuGrid {
        SudokuGrid::from_values([
            [7, 8, 0, 4, 0, 0, 1, 2, 0],
            [6, 0, 0, 0, 7, 5, 0, 0, 9],
            [0, 0, 0, 6, 0, 1, 0, 7, 8],
            [0, 0, 7, 0, 4, 0, 2, 6, 0],
            [0, 0, 1, 0, 5, 0, 9, 3, 0],
            [9, 0, 4, 0, 6, 0, 0, 0, 5],
            [0, 7, 0, 3, 0, 0, 0, 1, 2],
            [1, 2, 0, 0, 0, 7, 4, 0, 0],
            [0, 4, 9, 2, 0, 6, 0, 0, 7]
        ]).unwrap()
    }

    #[test]
    fn backtracking_solves_classic_sudoku() {
        let puzzle = classic_puzzle();
        let mut grid = puzzle.clone();

        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_full());
        assert!(rules::check(&grid));
        assert!(grid.is_superset(&puzzle));
        assert_eq!(Some(5), grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(5), grid.get_cell(0, 8).unwrap());
    }

    #[test]
    fn backtracking_is_deterministic() {
        let mut first = classic_puzzle();
        let mut second = classic_puzzle();

        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut first));
        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn backtracking_solves_empty_grid() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_full());
        assert!(rules::check(&grid));

        // With no clues, the first row is filled with ascending digits.

        for column in 0..9 {
            assert_eq!(Some(column + 1), grid.get_cell(column, 0).unwrap());
        }
    }

    #[test]
    fn backtracking_reconstructs_unique_solution() {
        let solution = full_grid();
        let mut grid = solution.clone();

        // Blanking the diagonal leaves every empty cell with eight digits in
        // its row, so the solution is forced.

        for i in 0..9 {
            grid.clear_cell(i, i).unwrap();
        }

        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut grid));
        assert_eq!(solution, grid);
    }

    #[test]
    fn solved_grid_accepted_unchanged() {
        let solution = full_grid();
        let mut grid = solution.clone();

        assert_eq!(Ok(true), BacktrackingSolver.solve(&mut grid));
        assert_eq!(solution, grid);
    }

    #[test]
    fn unsolvable_puzzle_leaves_grid_unchanged() {
        // The last cell of the first row can hold no digit: 1 to 8 are
        // already in its row and the 9 below blocks its column. The clues
        // themselves are conflict-free.

        let puzzle = SudokuGrid::from_values([
            [1, 2, 3, 4, 5, 6, 7, 8, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 9],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0]
        ]).unwrap();
        let mut grid = puzzle.clone();

        assert_eq!(Ok(false), BacktrackingSolver.solve(&mut grid));
        assert_eq!(puzzle, grid);
    }

    #[test]
    fn conflicting_clues_rejected() {
        let mut grid = SudokuGrid::new();

        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(4, 0, 5).unwrap();

        assert_eq!(Err(SudokuError::InvalidPuzzle),
            BacktrackingSolver.solve(&mut grid));
    }

    #[test]
    fn full_but_invalid_grid_rejected() {
        let mut values = [
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 4, 5, 6, 7, 8, 9, 1],
            [5, 6, 7, 8, 9, 1, 2, 3, 4],
            [8, 9, 1, 2, 3, 4, 5, 6, 7],
            [3, 4, 5, 6, 7, 8, 9, 1, 2],
            [6, 7, 8, 9, 1, 2, 3, 4, 5],
            [9, 1, 2, 3, 4, 5, 6, 7, 8]
        ];
        values[0][0] = 2;

        let mut grid = SudokuGrid::from_values(values).unwrap();

        assert_eq!(Err(SudokuError::InvalidPuzzle),
            BacktrackingSolver.solve(&mut grid));
    }
}
