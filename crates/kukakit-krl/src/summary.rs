//! Per-chunk derived values
//!
//! Everything a renderer needs to lay out one spline block, computed from the
//! chunk alone. Nothing is carried over between chunks.

use kukakit_core::E6Pos;
use kukakit_pathgen::{marked_time, residual_time};

/// A non-empty chunk together with its derived timing and layout values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkSummary<'a> {
    /// 0-based position of the chunk in the trajectory
    pub ordinal: usize,
    /// The chunk's points, in trajectory order
    pub points: &'a [E6Pos],
    /// Number of points in the chunk
    pub size: usize,
    /// Sum of the time marks in the chunk
    pub marked_time: f64,
    /// Time after the last time mark of the chunk
    pub residual_time: f64,
    /// Duration of the spline block: marked time plus residual
    pub total_time: f64,
    /// Global index of the first point
    pub first_index: usize,
    /// Global index of the last point
    pub last_index: usize,
    /// Time code of the final point
    pub last_time_code: f64,
}

impl<'a> ChunkSummary<'a> {
    /// Summarise `points`. Returns `None` for an empty slice.
    pub fn new(ordinal: usize, points: &'a [E6Pos]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;

        let marked = marked_time(points);
        let residual = residual_time(points);

        Some(Self {
            ordinal,
            points,
            size: points.len(),
            marked_time: marked,
            residual_time: residual,
            total_time: marked + residual,
            first_index: first.index,
            last_index: last.index,
            last_time_code: last.time_code,
        })
    }

    /// True for the first point of the chunk
    pub fn is_first_in_chunk(&self, index: usize) -> bool {
        index == self.first_index
    }

    /// True for the last point of the chunk
    pub fn is_last_in_chunk(&self, index: usize) -> bool {
        index == self.last_index
    }

    /// True when `i` is a multiple of `n`. Always false for `n == 0`.
    pub fn is_multiple_of(i: usize, n: usize) -> bool {
        n != 0 && i % n == 0
    }

    /// True when the block has to be closed with the residual time after
    /// this point: it is the last point and carries no mark of its own.
    pub fn needs_residual_part(&self, index: usize, time_mark: f64) -> bool {
        time_mark == 0.0 && self.is_last_in_chunk(index)
    }

    /// True when the chunk carries any timing at all
    pub fn is_timed(&self) -> bool {
        self.total_time > 0.0
    }

    /// Chunk size left-aligned in a field of `width` characters
    pub fn padded_total(&self, width: usize) -> String {
        format!("{:<width$}", self.size, width = width)
    }
}
