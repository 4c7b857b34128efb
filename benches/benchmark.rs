use criterion::{criterion_group, criterion_main, Criterion};

use aoc_helpers::{a_star, dijkstra, flood_fill, Grid, Heuristic, Vector2Int};

const SIZE: usize = 100;

/// Digit grid with a deterministic, irregular cost pattern.
fn weighted_grid() -> Grid<u8> {
    let input: String = (0..SIZE)
        .map(|row| {
            let mut line: String = (0..SIZE)
                .map(|col| char::from(b'1' + ((row * 7 + col * 13 + row * col) % 9) as u8))
                .collect();
            line.push('\n');
            line
        })
        .collect();
    Grid::from_bytes(input.as_bytes())
        .expect("generated grid is rectangular")
        .with_cost(|node| u32::from(node.value - b'0'))
        .with_heuristic(Heuristic::Manhattan(1))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let grid = weighted_grid();
    let start = Vector2Int::ZERO;
    let goal = Vector2Int::new(SIZE as i32 - 1, SIZE as i32 - 1);

    c.bench_function("a_star", |b| b.iter(|| a_star(&grid, start, goal)));
    c.bench_function("dijkstra", |b| b.iter(|| dijkstra(&grid, start, |pos| pos == goal)));
    c.bench_function("flood_fill", |b| b.iter(|| flood_fill(&grid, start)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
