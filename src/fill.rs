use crate::color::Color;
use crate::error::CanvasResult;
use crate::grid::PixelGrid;

/// Summary of a single flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Cells repainted with the new color
    pub painted: usize,
    /// Coordinates taken off the work list, stale duplicates included
    pub pops: usize,
    /// The pop limit was hit with work still queued
    pub truncated: bool,
}

/// Upper bound on pops for a complete fill of an `n x n` grid.
///
/// A cell is painted at most once and each paint pushes at most four
/// neighbours, so a fill can never pop more than `4 * n * n + 1` entries.
/// Duplicate pushes make a plain `n * n` cap too small: an empty 8x8 grid
/// needs 225 pops.
pub fn pop_limit(n: usize) -> usize {
    n.saturating_mul(n).saturating_mul(4).saturating_add(1)
}

/// Repaint the 4-connected region of the seed's color with `new_color`.
///
/// Fails only if the seed is out of range, in which case nothing is written.
/// Filling a region that already has `new_color` is a no-op.
pub fn fill(grid: &mut PixelGrid, seed_x: i32, seed_y: i32, new_color: Color) -> CanvasResult<FillReport> {
    let limit = pop_limit(grid.dimensions());
    fill_with_limit(grid, seed_x, seed_y, new_color, limit)
}

/// [`fill`] with an explicit pop limit. Reaching the limit stops the fill
/// silently and is reported through [`FillReport::truncated`].
pub fn fill_with_limit(
    grid: &mut PixelGrid,
    seed_x: i32,
    seed_y: i32,
    new_color: Color,
    limit: usize,
) -> CanvasResult<FillReport> {
    let target = grid.get(seed_x, seed_y)?;
    let mut report = FillReport::default();

    if target == new_color {
        return Ok(report);
    }

    let mut stack = vec![(seed_x, seed_y)];

    while report.pops < limit {
        let Some((x, y)) = stack.pop() else {
            break;
        };
        report.pops += 1;

        if !grid.contains(x, y) {
            continue;
        }
        // A cell pushed twice is absorbed here once its first pop repainted it
        if grid.get(x, y)? != target {
            continue;
        }

        grid.set(x, y, new_color)?;
        report.painted += 1;

        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if grid.contains(nx, ny) {
                stack.push((nx, ny));
            }
        }
    }

    report.truncated = !stack.is_empty();
    if report.truncated {
        log::warn!(
            "Fill from ({}, {}) stopped at {} pops with {} cells still queued",
            seed_x,
            seed_y,
            report.pops,
            stack.len()
        );
    } else {
        log::debug!(
            "Fill from ({}, {}) painted {} cells in {} pops",
            seed_x,
            seed_y,
            report.painted,
            report.pops
        );
    }

    Ok(report)
}
