use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlife::{CellState, Grid, next_generation};

fn make_grid(size: usize) -> Grid {
    Grid::from_fn(size, size, |pos| CellState::from((pos.row + pos.column) % 3 == 0))
        .expect("non-empty grid")
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("flat", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |current| next_generation(&current),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_generation);
criterion_main!(benches);
