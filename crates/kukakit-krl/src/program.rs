//! KRL motion program (`.src`) rendering
//!
//! One `DEF` module per chunk holding one or more `SPLINE` blocks.

use crate::{fmt_time, ChunkSummary, KrlRenderer};

/// Column width of the point count in the program header
const HEADER_TOTAL_WIDTH: usize = 19;

/// Renders the `.src` motion program: a spline block over the chunk's points
///
/// When the chunk carries time marks, the block is timed with
/// `TIME_BLOCK` statements: one part per mark, a closing part for the time
/// after the last mark, and the block total.
#[derive(Debug, Clone, Copy)]
pub struct SrcRenderer {
    passes: usize,
}

impl SrcRenderer {
    pub fn new() -> Self {
        Self { passes: 1 }
    }

    /// Traverse the chunk `passes` times, one spline block per pass
    pub fn with_passes(passes: usize) -> Self {
        Self { passes }
    }

    fn spline_block(chunk: &ChunkSummary<'_>, src: &mut String) {
        let timed = chunk.is_timed();

        src.push_str("SPLINE\n");

        for p in chunk.points {
            src.push_str(&format!("  SPL XP{}\n", p.index));

            if !timed {
                continue;
            }
            // The first SPL is the start pose of the timed block
            if chunk.is_first_in_chunk(p.index) {
                src.push_str("  TIME_BLOCK START\n");
            }
            if p.is_time_mark() {
                src.push_str(&format!("  TIME_BLOCK PART = {}\n", fmt_time(p.time_mark)));
            } else if chunk.needs_residual_part(p.index, p.time_mark) {
                src.push_str(&format!(
                    "  TIME_BLOCK PART = {}\n",
                    fmt_time(chunk.residual_time)
                ));
            }
        }

        if timed {
            src.push_str(&format!(
                "  TIME_BLOCK END = {}\n",
                fmt_time(chunk.total_time)
            ));
        }
        src.push_str("ENDSPLINE\n");
    }
}

impl Default for SrcRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl KrlRenderer for SrcRenderer {
    fn extension(&self) -> &'static str {
        "src"
    }

    fn render(&self, module: &str, chunk: &ChunkSummary<'_>) -> String {
        let mut src = String::new();

        src.push_str("&ACCESS RVP\n");
        src.push_str("&REL 1\n");
        src.push_str(&format!("DEF {}( )\n", module));
        src.push_str(&format!(
            "; XP{}..XP{} points {}passes {}\n",
            chunk.first_index,
            chunk.last_index,
            chunk.padded_total(HEADER_TOTAL_WIDTH),
            self.passes
        ));

        for _ in 0..self.passes {
            Self::spline_block(chunk, &mut src);
        }

        src.push_str("END\n");
        src
    }
}
