//! Acceleration grid for the minimum-distance test.
//!
//! # Layout
//!
//! Cells are squares of side `r / √2`, so a cell's diagonal equals the
//! minimum spacing `r` and no cell can ever hold two accepted points.  Each
//! cell stores the point itself (not an index), which lets the sampler emit
//! points lazily without keeping a separate sample list.
//!
//! A candidate can only conflict with points at most `r` away, i.e. at most
//! two cells away on either axis, so the 5×5 block around its cell is the
//! whole neighbourhood that needs checking.

use std::f32::consts::FRAC_1_SQRT_2;

use ev_core::{Domain, Vec2};

use crate::{SamplingError, SamplingResult};

/// Half-width of the neighbourhood block, in cells.
const NEIGHBOURHOOD: usize = 2;

/// Largest grid a sampler will allocate.
pub const MAX_CELLS: usize = 1 << 24;

/// Row-major occupancy grid over a [`Domain`].
#[derive(Clone, Debug)]
pub struct BackgroundGrid {
    cell:  f32,
    cols:  usize,
    rows:  usize,
    cells: Vec<Option<Vec2>>,
}

impl BackgroundGrid {
    /// Build an empty grid for `domain` with minimum spacing `spacing`.
    ///
    /// Both arguments are assumed validated (positive, finite).  Fails with
    /// [`SamplingError::DomainTooLarge`] past [`MAX_CELLS`] cells.
    pub fn new(domain: Domain, spacing: f32) -> SamplingResult<Self> {
        let (cols, rows) = Self::dimensions_for(domain, spacing)?;
        Ok(Self::sized(spacing, cols, rows))
    }

    /// `(columns, rows)` of the grid [`new`](Self::new) would build.
    pub fn dimensions_for(domain: Domain, spacing: f32) -> SamplingResult<(usize, usize)> {
        let cell = spacing * FRAC_1_SQRT_2;
        // Float-to-int casts saturate, so an absurd ratio lands on usize::MAX.
        let cols = (domain.width / cell).ceil().max(1.0) as usize;
        let rows = (domain.height / cell).ceil().max(1.0) as usize;
        match cols.checked_mul(rows) {
            Some(n) if n <= MAX_CELLS => Ok((cols, rows)),
            _ => Err(SamplingError::DomainTooLarge { cols, rows, max: MAX_CELLS }),
        }
    }

    /// Empty grid with dimensions already checked by `dimensions_for`.
    pub(crate) fn sized(spacing: f32, cols: usize, rows: usize) -> Self {
        Self { cell: spacing * FRAC_1_SQRT_2, cols, rows, cells: vec![None; cols * rows] }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// `(columns, rows)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of occupied cells (= points inserted so far).
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// `(col, row)` of the cell containing `p`, clamped onto the grid.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> (usize, usize) {
        let col = ((p.x / self.cell).max(0.0) as usize).min(self.cols - 1);
        let row = ((p.y / self.cell).max(0.0) as usize).min(self.rows - 1);
        (col, row)
    }

    /// Record an accepted point.
    #[inline]
    pub fn insert(&mut self, p: Vec2) {
        let (col, row) = self.cell_of(p);
        debug_assert!(
            self.cells[row * self.cols + col].is_none(),
            "two accepted points share a grid cell"
        );
        self.cells[row * self.cols + col] = Some(p);
    }

    /// `true` if every stored point in the 5×5 neighbourhood of `p` is at
    /// least `sqrt(min_dist_sq)` away.
    pub fn is_far_enough(&self, p: Vec2, min_dist_sq: f32) -> bool {
        let (col, row) = self.cell_of(p);
        let col_lo = col.saturating_sub(NEIGHBOURHOOD);
        let row_lo = row.saturating_sub(NEIGHBOURHOOD);
        let col_hi = (col + NEIGHBOURHOOD).min(self.cols - 1);
        let row_hi = (row + NEIGHBOURHOOD).min(self.rows - 1);

        for r in row_lo..=row_hi {
            let base = r * self.cols;
            for c in col_lo..=col_hi {
                if let Some(q) = self.cells[base + c] {
                    if q.distance_squared(p) < min_dist_sq {
                        return false;
                    }
                }
            }
        }
        true
    }
}
