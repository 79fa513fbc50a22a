//! Bridson Poisson-disc sampling over a rectangle.
//!
//! # Algorithm
//!
//! 1. Seed one point uniformly inside the domain; it is emitted and becomes
//!    the first *active* point.
//! 2. While any point is active: pick an active point at random and try up
//!    to `attempts` candidates in the annulus `[r, 2r)` around it.  The first
//!    candidate that is inside the domain and at least `r` from every point
//!    in its grid neighbourhood is emitted and becomes active.
//! 3. An active point whose attempts all fail is retired (it stays emitted).
//!
//! Every emitted point occupies one grid cell of area `r² / 2`, so at most
//! `ceil(W·√2/r) · ceil(H·√2/r)` points can ever be emitted, and each loop
//! iteration either emits a point or retires one.  Generation therefore
//! always terminates.

use std::f32::consts::TAU;

use rand::Rng;

use ev_core::config::DEFAULT_ATTEMPTS;
use ev_core::{Domain, Vec2};

use crate::{BackgroundGrid, SamplingError, SamplingResult};

// ── PoissonDiscSampler ────────────────────────────────────────────────────────

/// Validated sampler parameters.
///
/// # Example
///
/// ```
/// use ev_core::SimRng;
/// use ev_sampling::PoissonDiscSampler;
///
/// let sampler = PoissonDiscSampler::new(50.0, 50.0, 2.0).unwrap();
/// let mut rng = SimRng::new(7);
/// let points: Vec<_> = sampler.samples(&mut rng).collect();
/// assert!(points.len() > 100);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PoissonDiscSampler {
    domain:   Domain,
    spacing:  f32,
    attempts: u32,
    grid:     (usize, usize),
}

impl PoissonDiscSampler {
    /// Sampler over `[0, width) × [0, height)` with minimum spacing
    /// `spacing` and the default attempt budget (30).
    pub fn new(width: f32, height: f32, spacing: f32) -> SamplingResult<Self> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        check_positive("spacing", spacing)?;
        let domain = Domain::new(width, height);
        Ok(Self {
            domain,
            spacing,
            attempts: DEFAULT_ATTEMPTS,
            grid: BackgroundGrid::dimensions_for(domain, spacing)?,
        })
    }

    /// Same as [`new`](Self::new) but taking a [`Domain`].
    pub fn for_domain(domain: Domain, spacing: f32) -> SamplingResult<Self> {
        Self::new(domain.width, domain.height, spacing)
    }

    /// Override how many candidates are tried per active point.
    pub fn with_attempts(mut self, attempts: u32) -> SamplingResult<Self> {
        if attempts == 0 {
            return Err(SamplingError::ZeroAttempts);
        }
        self.attempts = attempts;
        Ok(self)
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Start a new lazy point sequence drawing randomness from `rng`.
    ///
    /// The returned iterator is finite and single-use; collect it if the
    /// points are needed more than once.
    pub fn samples<'r, R: Rng>(&self, rng: &'r mut R) -> Samples<'r, R> {
        Samples {
            rng,
            domain:     self.domain,
            spacing_sq: self.spacing * self.spacing,
            attempts:   self.attempts,
            grid:       BackgroundGrid::sized(self.spacing, self.grid.0, self.grid.1),
            active:     Vec::new(),
            seeded:     false,
        }
    }
}

fn check_positive(name: &'static str, value: f32) -> SamplingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SamplingError::InvalidParameter { name, value })
    }
}

// ── Samples ───────────────────────────────────────────────────────────────────

/// Lazy Poisson-disc point stream produced by [`PoissonDiscSampler::samples`].
pub struct Samples<'r, R: Rng> {
    rng:        &'r mut R,
    domain:     Domain,
    spacing_sq: f32,
    attempts:   u32,
    grid:       BackgroundGrid,
    active:     Vec<Vec2>,
    seeded:     bool,
}

impl<R: Rng> Samples<'_, R> {
    /// Points currently eligible to spawn neighbours.
    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    fn accept(&mut self, p: Vec2) -> Vec2 {
        self.grid.insert(p);
        self.active.push(p);
        p
    }

    /// Area-uniform random point in the annulus `[r, 2r)` around `centre`.
    fn annulus_candidate(&mut self, centre: Vec2) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        let u: f32 = self.rng.r#gen();
        let dist = (u * 3.0 * self.spacing_sq + self.spacing_sq).sqrt();
        centre + Vec2::from_angle(angle) * dist
    }
}

impl<R: Rng> Iterator for Samples<'_, R> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if !self.seeded {
            self.seeded = true;
            let seed = Vec2::new(
                self.rng.gen_range(0.0..self.domain.width),
                self.rng.gen_range(0.0..self.domain.height),
            );
            return Some(self.accept(seed));
        }

        while !self.active.is_empty() {
            let pick = self.rng.gen_range(0..self.active.len());
            let base = self.active[pick];

            for _ in 0..self.attempts {
                let candidate = self.annulus_candidate(base);
                if self.domain.contains(candidate)
                    && self.grid.is_far_enough(candidate, self.spacing_sq)
                {
                    return Some(self.accept(candidate));
                }
            }

            // Exhausted: retire, but the point stays emitted.
            self.active.swap_remove(pick);
        }
        None
    }
}
