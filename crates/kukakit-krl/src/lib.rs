//! # KukaKit KRL Output
//!
//! Turns chunks of spline points into KUKA Robot Language files.
//!
//! Each chunk is summarised once ([`ChunkSummary`]) and handed to every
//! configured [`KrlRenderer`]. The default set writes the point declarations
//! (`.dat`) and the spline motion program (`.src`) for every chunk.

pub mod datalist;
pub mod emitter;
pub mod program;
pub mod summary;

pub use datalist::DatRenderer;
pub use emitter::{ChunkEmitter, EmitReport};
pub use program::SrcRenderer;
pub use summary::ChunkSummary;

/// A destination format for rendered chunks
pub trait KrlRenderer: Send + Sync {
    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Render one chunk as the KRL module `module`
    fn render(&self, module: &str, chunk: &ChunkSummary<'_>) -> String;
}

/// Format a length or angle the way the generated files expect
pub(crate) fn fmt_coord(value: f64) -> String {
    format!("{:.4}", value)
}

/// Format a time value (seconds)
pub(crate) fn fmt_time(value: f64) -> String {
    format!("{:.6}", value)
}
