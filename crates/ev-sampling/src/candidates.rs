//! Candidate hiding spots: Poisson-disc samples lifted onto the ground plane.

use rand::Rng;

use ev_core::geom::lift_to_ground;
use ev_core::{AvoiderConfig, Vec3};

use crate::{PoissonDiscSampler, SamplingResult};

/// The full set of candidate positions for one avoider.
///
/// Generated once per session and never modified afterwards; there is no
/// `&mut` access to the points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSet {
    origin: Vec3,
    points: Vec<Vec3>,
}

impl CandidateSet {
    /// Sample a `2·sample_radius` square centred on `origin` and place each
    /// point at `config.ground_height`.
    pub fn generate<R: Rng>(
        config: &AvoiderConfig,
        origin: Vec3,
        rng:    &mut R,
    ) -> SamplingResult<Self> {
        let half = config.sample_radius;
        let sampler = PoissonDiscSampler::for_domain(config.domain(), config.spacing)?
            .with_attempts(config.attempts)?;

        let points = sampler
            .samples(rng)
            .map(|p| lift_to_ground(p, half, origin, config.ground_height))
            .collect();

        Ok(Self { origin, points })
    }

    /// Wrap an explicit point list (hand-placed spots, tests).
    pub fn from_points(origin: Vec3, points: Vec<Vec3>) -> Self {
        Self { origin, points }
    }

    /// Centre of the sampled square.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
