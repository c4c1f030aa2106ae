//! Trajectory chunking
//!
//! The controller accepts a limited number of points per spline block, so a
//! long trajectory is written as several consecutive blocks.

use kukakit_core::E6Pos;

/// Number of chunks `chunk` produces for `len` points
pub fn chunk_count(len: usize, max_size: usize) -> usize {
    if len == 0 {
        0
    } else if max_size == 0 {
        1
    } else {
        len.div_ceil(max_size)
    }
}

/// Split `trajectory` into consecutive chunks of at most `max_size` points.
///
/// `max_size == 0` keeps the whole trajectory in one chunk. The last chunk
/// takes the remainder. An empty trajectory yields no chunks.
pub fn chunk(trajectory: &[E6Pos], max_size: usize) -> Vec<&[E6Pos]> {
    if trajectory.is_empty() {
        return Vec::new();
    }
    let size = if max_size == 0 {
        trajectory.len()
    } else {
        max_size
    };

    let chunks: Vec<&[E6Pos]> = trajectory.chunks(size).collect();
    tracing::debug!(
        "Split {} points into {} chunk(s) of up to {}",
        trajectory.len(),
        chunks.len(),
        size
    );
    chunks
}
