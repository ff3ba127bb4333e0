use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_classic::SudokuGrid;
use sudoku_classic::solver::{BacktrackingSolver, Solver};

// The puzzles are kept as parseable codes so each iteration starts from a
// fresh grid.

const CLASSIC_PUZZLE: &str = "\
    7,8, ,4, , ,1,2, ,\
    6, , , ,7,5, , ,9,\
     , , ,6, ,1, ,7,8,\
     , ,7, ,4, ,2,6, ,\
     , ,1, ,5, ,9,3, ,\
    9, ,4, ,6, , , ,5,\
     ,7, ,3, , , ,1,2,\
    1,2, , , ,7,4, , ,\
     ,4,9,2, ,6, , ,7";

const SPARSE_PUZZLE: &str = "\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

fn solve_code(code: &str) {
    let mut grid = SudokuGrid::parse(code).unwrap();
    let solved = BacktrackingSolver.solve(&mut grid).unwrap();
    assert!(solved);
}

fn benchmark_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");

    group.bench_function("classic",
        |b| b.iter(|| solve_code(CLASSIC_PUZZLE)));
    group.bench_function("sparse",
        |b| b.iter(|| solve_code(SPARSE_PUZZLE)));
    group.finish();
}

criterion_group!(benches, benchmark_backtracking);
criterion_main!(benches);
