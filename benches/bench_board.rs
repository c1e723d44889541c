use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Rack, Solver, WordIndex};

mod common;
use common::WORDS;

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "......h........",
    "......o........",
    "......u.b......",
    "....planets....",
    "......e.d......",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn bench_find_best_move(c: &mut Criterion, name: &str, rack: &str) {
    let index = WordIndex::from_words(WORDS).unwrap();
    let board = Board::default().with_state_from_strings(TEST_STATE).unwrap();
    let solver = Solver::new(&board, &index);
    let rack: Rack = rack.parse().unwrap();
    c.bench_function(&format!("solver.find_best_move.{}", name), |b| {
        b.iter(|| solver.find_best_move(&rack))
    });
}

fn bench_first_move(c: &mut Criterion) {
    let index = WordIndex::from_words(WORDS).unwrap();
    let board = Board::default();
    let solver = Solver::new(&board, &index);
    let rack: Rack = "planets".parse().unwrap();
    c.bench_function("solver.find_best_move.first", |b| {
        b.iter(|| solver.find_best_move(&rack))
    });
}

fn bench_find_best_moves(c: &mut Criterion) {
    let index = WordIndex::from_words(WORDS).unwrap();
    let board = Board::default().with_state_from_strings(TEST_STATE).unwrap();
    let solver = Solver::new(&board, &index);
    let racks: Vec<Rack> = [
        "ddenuvw", "eeijkvy", "abeinuy", "ceeehtv", "*bjjoov", "bbeeotu", "eghknrt", "ddnosuw",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();
    c.bench_function("solver.find_best_moves", |b| {
        b.iter(|| solver.find_best_moves(&racks))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_first_move(c);
    bench_find_best_move(c, "1", "abel");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_find_best_move(c, "2", "mdjenj*");
    bench_find_best_move(c, "3", "polkas*");
    bench_find_best_moves(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
