//! # KukaKit Path Generation
//!
//! This crate produces and partitions the point sequences that end up in KRL
//! spline blocks.
//!
//! ## Producers
//!
//! - **Circle**: analytic circle in the Y-Z plane at a fixed X
//! - **Random Circles**: many circles with randomised center, tilt and radius
//! - **Repeat Circle**: one circle traversed several times
//! - **Spline Table**: comma separated point table import
//!
//! ## Pipeline Helpers
//!
//! - **Timing**: residual time after the last time mark of a chunk
//! - **Chunker**: splits a trajectory into blocks of bounded size
//!
//! Producers that can contribute to the same trajectory share an index counter
//! owned by the caller, so point numbers stay contiguous across calls.

pub mod chunker;
pub mod circle;
pub mod patterns;
pub mod spline_table;
pub mod timing;

pub use chunker::{chunk, chunk_count};
pub use circle::{generate_circle, CircleGenerator, CircleParameters, ANGLE_STEP};
pub use patterns::{
    RandomCircleGenerator, RandomCircleParameters, RepeatCircleGenerator, RepeatCircleParameters,
    RepeatedPath, SampleRange,
};
pub use spline_table::{parse_table, FieldPolicy, TableParser, TABLE_COLUMNS};
pub use timing::{marked_time, residual_time};
