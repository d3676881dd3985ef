//! Benchmarks for move resolution.
//!
//! # Benchmarks
//!
//! - **`make_move`**: plays one full move (vacate + resolve) on a freshly
//!   built puzzle, for every driving kid type.
//! - **`move_cycle`**: plays a fixed sequence of moves in all directions and
//!   resets the puzzle afterwards.
//!
//! # Test Data
//!
//! Square boards of increasing size where three out of four cells hold a
//! group, with kid types and counts laid out in a fixed repeating pattern.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench moves
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dancefloor_core::{Direction, KidType, Location};
use dancefloor_game::{GroupDesc, Puzzle, PuzzleDesc};

const SIZES: [u16; 3] = [5, 16, 64];

fn patterned_desc(size: u16) -> PuzzleDesc {
    let mut groups = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let n = usize::from(x) * 7 + usize::from(y) * 13;
            if n % 4 == 0 {
                continue;
            }
            let kid_type = KidType::ALL[n % KidType::ALL.len()];
            let count = u32::from(x % 5 + y % 3 + 1);
            groups.push(GroupDesc::new(kid_type, count, Location::new(x, y)));
        }
    }
    PuzzleDesc::new(size, size, groups)
}

fn bench_make_move(c: &mut Criterion) {
    for size in SIZES {
        let desc = patterned_desc(size);
        for driving in KidType::ALL {
            c.bench_with_input(
                BenchmarkId::new("make_move", format!("{size}x{size}/{driving}")),
                &desc,
                |b, desc| {
                    b.iter_batched(
                        || Puzzle::from_desc(desc).unwrap(),
                        |mut puzzle| {
                            hint::black_box(puzzle.make_move(Direction::East, driving).unwrap())
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_move_cycle(c: &mut Criterion) {
    for size in SIZES {
        let desc = patterned_desc(size);
        c.bench_with_input(
            BenchmarkId::new("move_cycle", format!("{size}x{size}")),
            &desc,
            |b, desc| {
                let mut puzzle = Puzzle::from_desc(desc).unwrap();
                b.iter(|| {
                    for (direction, driving) in Direction::ALL.into_iter().zip(KidType::ALL) {
                        hint::black_box(puzzle.make_move(direction, driving).unwrap());
                    }
                    puzzle.reset();
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    targets = bench_make_move, bench_move_cycle
);
criterion_main!(benches);
