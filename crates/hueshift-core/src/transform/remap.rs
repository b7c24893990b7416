//! Coordinate remapping shared by rotation and flips.

use crate::config::Geometry;
use crate::{Bitmap, Dimensions};

/// The four geometric edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometricOp {
    RotateClockwise,
    RotateCounterClockwise,
    FlipHorizontal,
    FlipVertical,
}

/// Maps an output position to the source position it copies from.
///
/// Formulas are written against the *source* dimensions `w` x `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormula {
    /// `src = (w - i - 1) * h + j` with `i = k / h`, `j = k % h`.
    ReverseRuns,
    /// `src = i * h + h - j - 1` with `i = k / h`, `j = k % h`.
    ReverseWithinRuns,
    /// Quarter turn clockwise over rows of `w`; output rows are `h` wide.
    QuarterTurnClockwise,
    /// Quarter turn counter-clockwise over rows of `w`; output rows are `h` wide.
    QuarterTurnCounterClockwise,
    /// Reverse each row of `w`.
    MirrorRows,
    /// Reverse the order of the rows.
    MirrorColumns,
}

impl IndexFormula {
    /// Source index for output index `k`.
    #[inline]
    pub fn source_index(self, source: Dimensions, k: usize) -> usize {
        let w = source.width as usize;
        let h = source.height as usize;
        match self {
            IndexFormula::ReverseRuns => {
                let (i, j) = (k / h, k % h);
                (w - i - 1) * h + j
            }
            IndexFormula::ReverseWithinRuns => {
                let (i, j) = (k / h, k % h);
                i * h + h - j - 1
            }
            IndexFormula::QuarterTurnClockwise => {
                let (x, y) = (k % h, k / h);
                (h - 1 - x) * w + y
            }
            IndexFormula::QuarterTurnCounterClockwise => {
                let (x, y) = (k % h, k / h);
                x * w + (w - 1 - y)
            }
            IndexFormula::MirrorRows => {
                let (x, y) = (k % w, k / w);
                y * w + (w - 1 - x)
            }
            IndexFormula::MirrorColumns => {
                let (x, y) = (k % w, k / w);
                (h - 1 - y) * w + x
            }
        }
    }
}

/// Pick the formula and dimension swap for `op` under `geometry`.
pub fn plan(op: GeometricOp, geometry: Geometry) -> (IndexFormula, bool) {
    match (geometry, op) {
        (Geometry::Legacy, GeometricOp::RotateClockwise) => (IndexFormula::ReverseRuns, true),
        (Geometry::Legacy, GeometricOp::RotateCounterClockwise) => {
            (IndexFormula::ReverseWithinRuns, true)
        }
        (Geometry::Legacy, GeometricOp::FlipHorizontal) => (IndexFormula::ReverseWithinRuns, false),
        (Geometry::Legacy, GeometricOp::FlipVertical) => (IndexFormula::ReverseRuns, false),
        (Geometry::Conventional, GeometricOp::RotateClockwise) => {
            (IndexFormula::QuarterTurnClockwise, true)
        }
        (Geometry::Conventional, GeometricOp::RotateCounterClockwise) => {
            (IndexFormula::QuarterTurnCounterClockwise, true)
        }
        (Geometry::Conventional, GeometricOp::FlipHorizontal) => (IndexFormula::MirrorRows, false),
        (Geometry::Conventional, GeometricOp::FlipVertical) => (IndexFormula::MirrorColumns, false),
    }
}

/// Build a new bitmap by pulling each output pixel through `formula`.
///
/// The output always holds `width * height` pixels; when
/// `swap_dimensions` is set the output dimensions are the source's swapped.
pub fn remap(source: &Bitmap, formula: IndexFormula, swap_dimensions: bool) -> Bitmap {
    let dims = source.dimensions;
    let pixels = (0..source.pixels.len())
        .map(|k| source.pixels[formula.source_index(dims, k)])
        .collect();

    let dimensions = if swap_dimensions { dims.swapped() } else { dims };
    Bitmap::new(dimensions, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
