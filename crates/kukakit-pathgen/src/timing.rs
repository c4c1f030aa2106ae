//! Spline timing helpers
//!
//! A spline block is timed in parts: every point carrying a time mark closes a
//! part. Whatever time follows the last mark of a block has to be appended as
//! a final part so the next block starts at the correct absolute time.

use kukakit_core::E6Pos;

/// Time from the last time mark in `points` to the final point.
///
/// Scans backwards from the final point; the first point with a non-zero time
/// mark is the checkpoint. Without any mark, the first point is the
/// checkpoint. Returns 0.0 for an empty slice.
pub fn residual_time(points: &[E6Pos]) -> f64 {
    let Some(last) = points.last() else {
        return 0.0;
    };

    let checkpoint = points
        .iter()
        .rev()
        .find(|p| p.is_time_mark())
        .unwrap_or(&points[0]);

    last.time_code - checkpoint.time_code
}

/// Sum of all time marks in `points`
pub fn marked_time(points: &[E6Pos]) -> f64 {
    points.iter().map(|p| p.time_mark).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(samples: &[(f64, f64)]) -> Vec<E6Pos> {
        samples
            .iter()
            .enumerate()
            .map(|(i, &(time_code, time_mark))| E6Pos {
                index: i + 1,
                time_code,
                time_mark,
                ..E6Pos::default()
            })
            .collect()
    }

    #[test]
    fn test_residual_after_leading_mark() {
        let points = timed(&[(1.0, 1.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(residual_time(&points), 2.0);
    }

    #[test]
    fn test_residual_uses_most_recent_mark() {
        let points = timed(&[(1.0, 1.0), (2.5, 1.5), (3.0, 0.0), (4.25, 0.0)]);
        assert_eq!(residual_time(&points), 1.75);
    }

    #[test]
    fn test_residual_is_zero_when_last_point_is_marked() {
        let points = timed(&[(1.0, 1.0), (2.0, 0.0), (3.0, 2.0)]);
        assert_eq!(residual_time(&points), 0.0);
    }

    #[test]
    fn test_residual_without_marks_starts_at_first_point() {
        let points = timed(&[(5.0, 0.0), (6.0, 0.0), (8.0, 0.0)]);
        assert_eq!(residual_time(&points), 3.0);
    }

    #[test]
    fn test_single_point_and_empty() {
        assert_eq!(residual_time(&timed(&[(4.0, 0.0)])), 0.0);
        assert_eq!(residual_time(&timed(&[(4.0, 4.0)])), 0.0);
        assert_eq!(residual_time(&[]), 0.0);
    }

    #[test]
    fn test_marked_time() {
        let points = timed(&[(1.0, 1.0), (2.0, 0.0), (3.5, 2.5)]);
        assert_eq!(marked_time(&points), 3.5);
        assert_eq!(marked_time(&[]), 0.0);
    }
}
