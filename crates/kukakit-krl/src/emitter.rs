//! Chunked KRL file emission
//!
//! Splits a trajectory into spline blocks and writes every block once per
//! renderer as `<prefix><ordinal>.<extension>` into the output directory.

use crate::{ChunkSummary, DatRenderer, KrlRenderer, SrcRenderer};
use kukakit_core::{E6Pos, EmitError};
use kukakit_pathgen::chunk;
use std::fs;
use std::path::PathBuf;

/// Files written by one emission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitReport {
    /// Number of chunks written
    pub chunks: usize,
    /// Written files, in chunk order then renderer order
    pub files: Vec<PathBuf>,
}

/// Writes chunks of a trajectory through a set of renderers
pub struct ChunkEmitter {
    output_dir: PathBuf,
    prefix: String,
    renderers: Vec<Box<dyn KrlRenderer>>,
}

impl ChunkEmitter {
    /// Create an emitter producing `.dat` and `.src` files
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self::with_renderers(
            output_dir,
            prefix,
            vec![
                Box::new(DatRenderer::default()),
                Box::new(SrcRenderer::default()),
            ],
        )
    }

    /// Create an emitter with an explicit renderer set
    pub fn with_renderers(
        output_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        renderers: Vec<Box<dyn KrlRenderer>>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            renderers,
        }
    }

    /// Module (and file stem) name of chunk `ordinal`
    pub fn module_name(&self, ordinal: usize) -> String {
        format!("{}{}", self.prefix, ordinal)
    }

    /// Render every chunk of `trajectory` and write the files.
    ///
    /// An empty trajectory writes nothing.
    pub fn emit(&self, trajectory: &[E6Pos], max_size: usize) -> Result<EmitReport, EmitError> {
        let chunks = chunk(trajectory, max_size);
        let mut report = EmitReport::default();
        if chunks.is_empty() {
            return Ok(report);
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| EmitError::CreateDir {
            path: self.output_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for (ordinal, points) in chunks.into_iter().enumerate() {
            let Some(summary) = ChunkSummary::new(ordinal, points) else {
                continue;
            };
            report.files.extend(self.emit_chunk(&summary)?);
            report.chunks += 1;
        }

        tracing::info!(
            "Wrote {} chunk(s), {} file(s) to {}",
            report.chunks,
            report.files.len(),
            self.output_dir.display()
        );
        Ok(report)
    }

    /// Render one chunk with every renderer and write the results
    pub fn emit_chunk(&self, summary: &ChunkSummary<'_>) -> Result<Vec<PathBuf>, EmitError> {
        let module = self.module_name(summary.ordinal);
        let mut written = Vec::with_capacity(self.renderers.len());

        for renderer in &self.renderers {
            let path = self
                .output_dir
                .join(format!("{}.{}", module, renderer.extension()));
            let content = renderer.render(&module, summary);

            fs::write(&path, content).map_err(|e| EmitError::Write {
                chunk: summary.ordinal,
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

            tracing::debug!(
                "Chunk {}: {} points (XP{}..XP{}), total time {:.6} -> {}",
                summary.ordinal,
                summary.size,
                summary.first_index,
                summary.last_index,
                summary.total_time,
                path.display()
            );
            written.push(path);
        }

        Ok(written)
    }
}
