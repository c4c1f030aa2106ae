//! # KukaKit
//!
//! Generates KUKA Robot Language spline programs from synthesized circle
//! paths or imported point tables.
//!
//! ## Architecture
//!
//! KukaKit is organized as a workspace with multiple crates:
//!
//! 1. **kukakit-core** - Spline point types and error types
//! 2. **kukakit-pathgen** - Circle and pattern generators, table import, timing, chunking
//! 3. **kukakit-krl** - Chunk summaries and `.dat`/`.src` rendering
//! 4. **kukakit-settings** - Configuration files and validation
//! 5. **kukakit** - Command line binary that integrates all crates
//!
//! Long trajectories are split into bounded spline blocks; every block is
//! written as a data list (`.dat`) and a motion program (`.src`).

pub mod cli;
pub mod commands;
pub mod progress;

pub use kukakit_core::{AuxFlags, E6Pos, Error, Result, Trajectory, Vector3};
pub use kukakit_krl::{ChunkEmitter, ChunkSummary, EmitReport, KrlRenderer};
pub use kukakit_pathgen::{chunk, generate_circle, residual_time, FieldPolicy, TableParser};
pub use kukakit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support
/// - `level` as the baseline directive
///
/// stdout is left to the progress ticker.
pub fn init_logging(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
