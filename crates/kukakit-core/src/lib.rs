//! # KukaKit Core
//!
//! Core types and error handling for KukaKit.
//! Provides the canonical motion point (`E6Pos`), the geometry triple used to
//! describe circle centers and orientations, and the error types shared by
//! the path generation and KRL emission crates.

pub mod data;
pub mod error;

pub use data::{AuxFlags, E6Pos, Trajectory, Vector3};

pub use error::{EmitError, Error, Result, TableError, TrajectoryError};
