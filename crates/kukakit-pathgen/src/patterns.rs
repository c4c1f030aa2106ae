//! Multi-circle path patterns
//!
//! Builds whole trajectories out of circle revolutions:
//! - random circles scattered in front of the robot
//! - a single circle traversed several times

use crate::circle::{CircleGenerator, CircleParameters};
use kukakit_core::{E6Pos, Trajectory, TrajectoryError, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Half-open integer range `[min, max)` to draw a parameter from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: i64,
    pub max: i64,
}

impl SampleRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Reject empty ranges
    pub fn validate(&self, name: &str) -> Result<(), TrajectoryError> {
        if self.min >= self.max {
            return Err(TrajectoryError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..self.max) as f64
    }
}

/// Parameters for the random circle pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomCircleParameters {
    /// Number of circles
    pub count: usize,
    /// Circle center X (mm)
    pub x: SampleRange,
    /// Circle center Z (mm)
    pub z: SampleRange,
    /// A orientation (degrees)
    pub a: SampleRange,
    /// Circle radius (mm); the lower bound must be > 0
    pub radius: SampleRange,
    /// Fixed B/C orientation (degrees)
    pub b: f64,
    pub c: f64,
    /// Seed for reproducible output; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for RandomCircleParameters {
    fn default() -> Self {
        Self {
            count: 30,
            x: SampleRange::new(550, 650),
            z: SampleRange::new(450, 550),
            a: SampleRange::new(45, 90),
            radius: SampleRange::new(30, 130),
            b: 0.0,
            c: -180.0,
            seed: None,
        }
    }
}

/// Point count of `count` circles, rejecting counts that overflow
fn total_points(count: usize) -> Result<usize, TrajectoryError> {
    let per_item = CircleGenerator::steps();
    count
        .checked_mul(per_item)
        .ok_or(TrajectoryError::TooManyPoints { count, per_item })
}

/// Generator for a trajectory made of randomly placed circles
pub struct RandomCircleGenerator {
    params: RandomCircleParameters,
}

impl RandomCircleGenerator {
    pub fn new(params: RandomCircleParameters) -> Result<Self, TrajectoryError> {
        params.x.validate("x")?;
        params.z.validate("z")?;
        params.a.validate("a")?;
        params.radius.validate("radius")?;
        if params.radius.min <= 0 {
            return Err(TrajectoryError::InvalidRadius {
                radius: params.radius.min as f64,
            });
        }
        let orientation = Vector3::new(0.0, params.b, params.c);
        if !orientation.is_finite() {
            return Err(TrajectoryError::NonFinite {
                name: "orientation".to_string(),
                p1: orientation.p1,
                p2: orientation.p2,
                p3: orientation.p3,
            });
        }
        total_points(params.count)?;
        Ok(Self { params })
    }

    /// Generate all circles into one trajectory with contiguous indices
    pub fn generate(&self) -> Result<Trajectory, TrajectoryError> {
        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    /// Generate using a caller supplied random source
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Trajectory, TrajectoryError> {
        let p = &self.params;
        let mut next_index = 0;
        let mut points = Vec::new();

        for _ in 0..p.count {
            let center = Vector3::new(p.x.sample(rng), 0.0, p.z.sample(rng));
            let orientation = Vector3::new(p.a.sample(rng), p.b, p.c);
            let radius = p.radius.sample(rng);

            let circle = CircleGenerator::new(CircleParameters {
                radius,
                center,
                orientation,
            })?;
            points.extend(circle.generate(&mut next_index));
        }

        tracing::debug!(
            "Generated {} random circles ({} points)",
            p.count,
            points.len()
        );
        Ok(points)
    }
}

/// Parameters for the repeated circle pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepeatCircleParameters {
    /// Number of traversals
    pub count: usize,
    pub circle: CircleParameters,
}

impl Default for RepeatCircleParameters {
    fn default() -> Self {
        Self {
            count: 30,
            circle: CircleParameters::default(),
        }
    }
}

/// A circle declared once and traversed `passes` times
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatedPath {
    pub points: Vec<E6Pos>,
    pub passes: usize,
}

/// Generator for a single circle traversed several times
pub struct RepeatCircleGenerator {
    params: RepeatCircleParameters,
}

impl RepeatCircleGenerator {
    pub fn new(params: RepeatCircleParameters) -> Result<Self, TrajectoryError> {
        CircleGenerator::new(params.circle)?;
        Ok(Self { params })
    }

    pub fn generate(&self) -> Result<RepeatedPath, TrajectoryError> {
        let mut next_index = 0;
        let points = CircleGenerator::new(self.params.circle)?.generate(&mut next_index);
        Ok(RepeatedPath {
            points,
            passes: self.params.count,
        })
    }
}
