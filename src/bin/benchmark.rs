//! Performance benchmark comparing the sparse stepping algorithms

use std::time::Instant;

use infinite_life::{Algorithm, Cell, Universe};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random square soup of side `2 * extent` around the origin
fn soup(extent: i64, density: f64, seed: u64) -> Vec<Cell> {
    let mut rng = StdRng::seed_from_u64(seed);
    (-extent..extent)
        .flat_map(|y| (-extent..extent).map(move |x| Cell::new(x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Average milliseconds per generation and the final population
fn benchmark(cells: &[Cell], algorithm: Algorithm, iterations: u64) -> (f64, usize) {
    let mut universe = Universe::from_cells(cells.iter().copied()).with_algorithm(algorithm);

    let start = Instant::now();
    if let Err(err) = universe.step_n(iterations) {
        eprintln!("{} stopped early: {err}", algorithm.name());
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, universe.len())
}

fn main() {
    println!("=== Infinite Life Performance Benchmark ===\n");

    let extents = [16, 32, 64, 128, 256];
    let iterations = 20;

    println!(
        "{:>10} {:>10} {:>12} {:>12} {:>14}",
        "Area", "Cells", "Tally", "Frontier", "Cells/sec"
    );
    println!("{:-<62}", "");

    for extent in extents {
        let cells = soup(extent, 0.3, extent as u64);
        let (tally_ms, tally_pop) = benchmark(&cells, Algorithm::CandidateTally, iterations);
        let (frontier_ms, frontier_pop) = benchmark(&cells, Algorithm::LiveFrontier, iterations);

        if tally_pop != frontier_pop {
            eprintln!("population mismatch: {tally_pop} vs {frontier_pop}");
        }

        let fastest = tally_ms.min(frontier_ms);
        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>14.0}",
            format!("{}x{}", extent * 2, extent * 2),
            cells.len(),
            tally_ms,
            frontier_ms,
            cells.len() as f64 / (fastest / 1000.0)
        );
    }

    println!("\n=== Sparse Far-Apart Population ===\n");

    // Same blinkers, spread ever further apart: cost must not grow with distance.
    for spacing in [10_i64, 1_000_000, 1_000_000_000_000] {
        let cells: Vec<Cell> = (0..1000)
            .flat_map(|i| {
                let origin = i * spacing;
                (0..3).map(move |dx| Cell::new(origin + dx, origin))
            })
            .collect();
        let (ms, population) = benchmark(&cells, Algorithm::default(), iterations);
        println!("spacing {:>16}: {:>8.3} ms/gen, {} cells", spacing, ms, population);
    }
}
