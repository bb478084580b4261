//! Stochastic grid synthesis: random fill plus cellular-automaton smoothing.
//!
//! The typical generation pass is:
//! 1. [`fill_random`] — seed every cell, forcing the border ring solid.
//! 2. [`smooth_step`] — run once per configured automaton step, pulling
//!    isolated cells toward their neighborhood majority.
//!
//! [`synthesize`] bundles both behind a validated [`MapConfig`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, ENTROPY_SEED, MapConfig};
use crate::grid::Grid2D;

/// Creates the RNG for a generation pass.
///
/// [`ENTROPY_SEED`] selects system entropy; every other seed produces a
/// fully reproducible stream.
pub fn seed_rng(seed: i64) -> StdRng {
    if seed == ENTROPY_SEED {
        StdRng::from_os_rng()
    } else {
        StdRng::seed_from_u64(seed as u64)
    }
}

/// Overwrites every cell of `grid` with a fresh random activation.
///
/// Border cells are always solid. An interior cell is solid with
/// probability `fill_percent` (in percent); solid cells get a random
/// intensity in `0.1..=1.0`, empty cells get `0`.
///
/// Cells are visited row-major (`y` outer, `x` inner) and the RNG is
/// consumed in that order: one intensity draw per border cell, one
/// probability roll per interior cell plus one intensity draw when the
/// roll lands solid. Reordering the draws would change every seeded
/// output, so the traversal must stay as-is.
///
/// ### Parameters
/// - `grid` - Target grid; all prior contents are discarded.
/// - `fill_percent` - Solid probability for interior cells, in `[0, 100]`.
/// - `rng` - Random source driving both rolls and intensities.
pub fn fill_random(grid: &mut Grid2D, fill_percent: f32, rng: &mut impl Rng) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let solid =
                grid.is_border(x, y) || rng.random_range(0.0..100.0) < fill_percent;
            let value = if solid { rng.random_range(0.1..=1.0) } else { 0.0 };
            grid.set(x, y, value);
        }
    }
}

/// Counts solid cells among the 8 neighbors of `(x, y)`.
///
/// Neighbors outside the grid or on the border ring count as solid, so
/// the forced border acts as a solid halo around the interior.
fn solid_neighbors(grid: &Grid2D, x: usize, y: usize) -> u32 {
    let mut hits = 0;
    for dy in -1..=1i32 {
        for dx in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            let solid = if !grid.contains(nx, ny) || grid.is_border(nx as usize, ny as usize)
            {
                true
            } else {
                grid.solid_at(nx as usize, ny as usize)
            };
            if solid {
                hits += 1;
            }
        }
    }
    hits
}

/// Runs one cellular-automaton smoothing pass over the interior cells.
///
/// For each interior cell, the solid count of its 8-cell neighborhood
/// decides its fate: more than 4 solid neighbors makes it solid with a
/// fresh intensity draw, fewer than 4 empties it, exactly 4 leaves it
/// untouched (and consumes no RNG draw).
///
/// The pass writes in place, cell by cell in row-major order, so a cell's
/// update can observe already-updated neighbors from the same pass. That
/// single-buffered behavior is part of the output contract; do not switch
/// to a read/write double buffer.
pub fn smooth_step(grid: &mut Grid2D, rng: &mut impl Rng) {
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            let hits = solid_neighbors(grid, x, y);
            if hits > 4 {
                grid.set(x, y, rng.random_range(0.1..=1.0));
            } else if hits < 4 {
                grid.set(x, y, 0.0);
            }
        }
    }
}

/// Synthesizes a full grid from a validated configuration.
///
/// Equivalent to [`fill_random`] followed by `cfg.automaton_steps` calls
/// to [`smooth_step`], all drawing from one RNG seeded per `cfg.seed`.
///
/// ### Returns
/// The finished grid, or a [`ConfigError`] if `cfg` is out of range.
pub fn synthesize(cfg: &MapConfig) -> Result<Grid2D, ConfigError> {
    cfg.validate()?;

    let mut rng = seed_rng(cfg.seed);
    let mut grid = Grid2D::new(cfg.width, cfg.height);

    fill_random(&mut grid, cfg.fill_percent, &mut rng);
    for _ in 0..cfg.automaton_steps {
        smooth_step(&mut grid, &mut rng);
    }

    log::debug!(
        "synthesized {}x{} grid: {} solid cells after {} automaton steps",
        cfg.width,
        cfg.height,
        grid.solid_cells(),
        cfg.automaton_steps
    );
    Ok(grid)
}
