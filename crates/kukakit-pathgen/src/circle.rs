use kukakit_core::{AuxFlags, E6Pos, TrajectoryError, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Angular distance between two consecutive circle points (radians)
pub const ANGLE_STEP: f64 = 0.1;

/// Parameters for a single circle path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleParameters {
    /// Circle radius (mm), must be > 0
    pub radius: f64,
    /// Center of the circle. `p1` is the fixed X, `p2`/`p3` the Y/Z center.
    pub center: Vector3,
    /// A/B/C orientation applied to every point
    pub orientation: Vector3,
}

impl Default for CircleParameters {
    fn default() -> Self {
        Self {
            radius: 100.0,
            center: Vector3::new(700.0, 0.0, 600.0),
            orientation: Vector3::new(90.0, 0.0, -180.0),
        }
    }
}

/// Generator for circle paths in the Y-Z plane
pub struct CircleGenerator {
    params: CircleParameters,
}

impl CircleGenerator {
    /// Create a new CircleGenerator, rejecting a non-positive radius and
    /// non-finite center or orientation components
    pub fn new(params: CircleParameters) -> Result<Self, TrajectoryError> {
        if !(params.radius > 0.0 && params.radius.is_finite()) {
            return Err(TrajectoryError::InvalidRadius {
                radius: params.radius,
            });
        }
        for (name, v) in [("center", params.center), ("orientation", params.orientation)] {
            if !v.is_finite() {
                return Err(TrajectoryError::NonFinite {
                    name: name.to_string(),
                    p1: v.p1,
                    p2: v.p2,
                    p3: v.p3,
                });
            }
        }
        Ok(Self { params })
    }

    /// Number of points produced for one revolution
    pub fn steps() -> usize {
        (TAU / ANGLE_STEP).ceil() as usize
    }

    /// Generate one revolution of points.
    ///
    /// `next_index` is the caller's running point counter: it is incremented
    /// once per point and the incremented value becomes the point's index.
    pub fn generate(&self, next_index: &mut usize) -> Vec<E6Pos> {
        let p = &self.params;
        let steps = Self::steps();
        let mut points = Vec::with_capacity(steps);

        for i in 0..steps {
            let angle = i as f64 * ANGLE_STEP;
            let (sin, cos) = angle.sin_cos();

            *next_index += 1;
            let position = Vector3::new(
                p.center.p1,
                sin * p.radius + p.center.p2,
                cos * p.radius + p.center.p3,
            );
            points.push(E6Pos::new(
                *next_index,
                position,
                p.orientation,
                AuxFlags::CIRCLE,
            ));
        }

        tracing::trace!(
            "Generated circle r={:.1} at X{:.1} with {} points (last index {})",
            p.radius,
            p.center.p1,
            points.len(),
            next_index
        );

        points
    }
}

/// Generate one circle revolution, advancing the shared index counter.
pub fn generate_circle(
    radius: f64,
    center: Vector3,
    orientation: Vector3,
    next_index: &mut usize,
) -> Result<Vec<E6Pos>, TrajectoryError> {
    let generator = CircleGenerator::new(CircleParameters {
        radius,
        center,
        orientation,
    })?;
    Ok(generator.generate(next_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_is_fixed() {
        assert_eq!(CircleGenerator::steps(), 63);
    }

    #[test]
    fn test_first_point_is_top_of_circle() {
        let mut index = 0;
        let points = generate_circle(
            50.0,
            Vector3::new(600.0, 10.0, 500.0),
            Vector3::new(45.0, 0.0, -180.0),
            &mut index,
        )
        .unwrap();

        let first = points[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.x, 600.0);
        assert!((first.y - 10.0).abs() < 1e-9);
        assert!((first.z - 550.0).abs() < 1e-9);
        assert_eq!(first.a, 45.0);
        assert_eq!(first.c, -180.0);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut index = 0;
        let err = generate_circle(0.0, Vector3::default(), Vector3::default(), &mut index)
            .unwrap_err();
        assert_eq!(err, TrajectoryError::InvalidRadius { radius: 0.0 });
        assert!(CircleGenerator::new(CircleParameters {
            radius: -3.0,
            ..CircleParameters::default()
        })
        .is_err());
        assert_eq!(index, 0);
    }

    #[test]
    fn test_rejects_non_finite_center_and_orientation() {
        let mut index = 0;
        let err = generate_circle(
            10.0,
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::default(),
            &mut index,
        )
        .unwrap_err();
        assert!(matches!(err, TrajectoryError::NonFinite { ref name, .. } if name == "center"));

        let err = generate_circle(
            10.0,
            Vector3::default(),
            Vector3::new(90.0, f64::INFINITY, -180.0),
            &mut index,
        )
        .unwrap_err();
        assert!(matches!(err, TrajectoryError::NonFinite { ref name, .. } if name == "orientation"));
        assert_eq!(index, 0);
    }

    #[test]
    fn test_points_carry_no_timing() {
        let mut index = 0;
        let points = CircleGenerator::new(CircleParameters::default())
            .unwrap()
            .generate(&mut index);
        assert!(points
            .iter()
            .all(|p| p.time_code == 0.0 && p.time_mark == 0.0));
        assert!(points.iter().all(|p| p.flags() == AuxFlags::CIRCLE));
        assert!(points.iter().all(|p| p.external_axes() == [0.0; 6]));
    }
}
