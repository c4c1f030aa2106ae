//! KRL data list (`.dat`) rendering
//!
//! Declares every point of a chunk as `XP<index>`, optionally grouped in folds.

use crate::{fmt_coord, fmt_time, ChunkSummary, KrlRenderer};
use kukakit_core::E6Pos;

/// Column width of the point count in the data list header
const HEADER_TOTAL_WIDTH: usize = 23;

/// Renders the `.dat` data list: one `E6POS` declaration per point
#[derive(Debug, Clone, Copy)]
pub struct DatRenderer {
    /// Wrap declarations in a fold every `fold_every` points; 0 disables folds
    fold_every: usize,
}

impl DatRenderer {
    pub fn new(fold_every: usize) -> Self {
        Self { fold_every }
    }

    fn declaration(p: &E6Pos) -> String {
        format!(
            "DECL E6POS XP{}={{X {},Y {},Z {},A {},B {},C {},S {},T {},E1 {},E2 {},E3 {},E4 {},E5 {},E6 {}}}\n",
            p.index,
            fmt_coord(p.x),
            fmt_coord(p.y),
            fmt_coord(p.z),
            fmt_coord(p.a),
            fmt_coord(p.b),
            fmt_coord(p.c),
            p.s,
            p.t,
            fmt_coord(p.e1),
            fmt_coord(p.e2),
            fmt_coord(p.e3),
            fmt_coord(p.e4),
            fmt_coord(p.e5),
            fmt_coord(p.e6),
        )
    }
}

impl Default for DatRenderer {
    fn default() -> Self {
        Self::new(50)
    }
}

impl KrlRenderer for DatRenderer {
    fn extension(&self) -> &'static str {
        "dat"
    }

    fn render(&self, module: &str, chunk: &ChunkSummary<'_>) -> String {
        let mut dat = String::new();

        dat.push_str("&ACCESS RVP\n");
        dat.push_str("&REL 1\n");
        dat.push_str(&format!("DEFDAT {} PUBLIC\n", module));
        dat.push_str(&format!(
            "; XP{}..XP{} points {}time {}\n",
            chunk.first_index,
            chunk.last_index,
            chunk.padded_total(HEADER_TOTAL_WIDTH),
            fmt_time(chunk.last_time_code)
        ));

        for (offset, p) in chunk.points.iter().enumerate() {
            if ChunkSummary::is_multiple_of(offset, self.fold_every) {
                dat.push_str(&format!(";FOLD XP{}\n", p.index));
            }

            dat.push_str(&Self::declaration(p));

            if self.fold_every > 0
                && (ChunkSummary::is_multiple_of(offset + 1, self.fold_every)
                    || chunk.is_last_in_chunk(p.index))
            {
                dat.push_str(";ENDFOLD\n");
            }
        }

        dat.push_str("ENDDAT\n");
        dat
    }
}
