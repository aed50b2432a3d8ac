//! Load sketch parsing.
//!
//! A sketch file is whitespace-delimited numeric rows. Two layouts are
//! understood: raw rectangular rows, and the 15-line core map whose ragged
//! rows are zero-padded into a 16×16 grid before use. Parsing produces one
//! [`LoadSample`] per retained cell, index-aligned by construction.

use std::fs;
use std::num::ParseFloatError;
use std::path::Path;

use bevy::prelude::{Color, Rect, Resource, Vec2};
use hexx::Hex;
use thiserror::Error;

use crate::colormap;
use crate::math;

/// Number of data lines in a core-layout sketch file.
pub const CORE_ROWS: usize = 15;

/// Column count of the padded core grid.
pub const CORE_WIDTH: usize = 16;

/// Zero tokens prepended to each core row, indexed by row. The remainder of
/// each row is right-filled with zeros up to [`CORE_WIDTH`].
pub const CORE_LEFT_PAD: [usize; CORE_ROWS] = [2, 1, 1, 1, 1, 1, 1, 2, 2, 3, 4, 5, 6, 7, 9];

/// Input layout of a sketch file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchFormat {
    /// 15-line core map, zero-padded per [`CORE_LEFT_PAD`] into a 16×16 grid
    /// with one trailing all-zero row.
    Core,
    /// Rectangular rows taken as-is.
    Grid,
}

/// Errors surfaced while reading or shaping a sketch file.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("cannot read sketch file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid load value {token:?}")]
    ParseValue {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("core layout expects exactly {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} values, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: {found} values overflow the {width}-column core layout")]
    RowOverflow {
        row: usize,
        width: usize,
        found: usize,
    },
}

/// One visible cell of the load map.
#[derive(Clone, Copy, Debug)]
pub struct LoadSample {
    /// Lattice coordinate (column, row) the value was read at.
    pub cell: Hex,
    /// World-space center of the hexagon.
    pub center: Vec2,
    /// Absolute load value from the file.
    pub value: f32,
    /// Gradient color precomputed for `value`.
    pub color: Color,
}

/// The loaded scene: every retained sample plus its world-space bounds.
#[derive(Resource, Clone, Debug)]
pub struct LoadScene {
    pub samples: Vec<LoadSample>,
    pub bounds: Rect,
}

impl LoadScene {
    fn from_samples(samples: Vec<LoadSample>) -> Self {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for sample in &samples {
            min = min.min(sample.center);
            max = max.max(sample.center);
        }
        if samples.is_empty() {
            min = Vec2::ZERO;
            max = Vec2::ZERO;
        }
        let margin = Vec2::splat(math::HEX_SIZE);
        Self {
            samples,
            bounds: Rect::from_corners(min - margin, max + margin),
        }
    }
}

/// Reads and parses a sketch file.
///
/// Values equal to `threshold` are dropped; everything else becomes a sample
/// with its lattice position and gradient color. Any failure is fatal to the
/// caller — there is no partial result.
pub fn load(path: &Path, format: SketchFormat, threshold: f32) -> Result<LoadScene, SketchError> {
    let text = fs::read_to_string(path)?;
    parse(&text, format, threshold)
}

/// Parses sketch text (see [`load`]).
pub fn parse(text: &str, format: SketchFormat, threshold: f32) -> Result<LoadScene, SketchError> {
    let rows = parse_rows(text)?;
    let rows = match format {
        SketchFormat::Core => pad_rows(rows, CORE_WIDTH, &CORE_LEFT_PAD)?,
        SketchFormat::Grid => require_rectangular(rows)?,
    };
    Ok(LoadScene::from_samples(build_samples(
        &rows,
        threshold,
        math::LATTICE_STEP,
    )))
}

/// Tokenizes non-blank lines into rows of absolute values.
fn parse_rows(text: &str) -> Result<Vec<Vec<f32>>, SketchError> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: f32 = token.parse().map_err(|source| SketchError::ParseValue {
                line: idx + 1,
                token: token.to_owned(),
                source,
            })?;
            row.push(value.abs());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Left-pads each row with zeros per `left_pad`, right-fills to `width`, and
/// appends one all-zero row.
///
/// The row count must match the pad table; a row that would not fit inside
/// `width` after padding is an error.
fn pad_rows(
    rows: Vec<Vec<f32>>,
    width: usize,
    left_pad: &[usize],
) -> Result<Vec<Vec<f32>>, SketchError> {
    if rows.len() != left_pad.len() {
        return Err(SketchError::LineCount {
            expected: left_pad.len(),
            found: rows.len(),
        });
    }
    let mut padded = Vec::with_capacity(rows.len() + 1);
    for (j, row) in rows.into_iter().enumerate() {
        let occupied = left_pad[j] + row.len();
        if occupied > width {
            return Err(SketchError::RowOverflow {
                row: j + 1,
                width,
                found: occupied,
            });
        }
        let mut out = vec![0.0; left_pad[j]];
        out.extend(row);
        out.resize(width, 0.0);
        padded.push(out);
    }
    padded.push(vec![0.0; width]);
    Ok(padded)
}

/// Rejects ragged input in grid mode; the first row sets the width.
fn require_rectangular(rows: Vec<Vec<f32>>) -> Result<Vec<Vec<f32>>, SketchError> {
    if let Some(expected) = rows.first().map(Vec::len) {
        for (j, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SketchError::RaggedRow {
                    row: j + 1,
                    expected,
                    found: row.len(),
                });
            }
        }
    }
    Ok(rows)
}

/// Builds index-aligned samples, dropping entries equal to `threshold`.
fn build_samples(rows: &[Vec<f32>], threshold: f32, step: f32) -> Vec<LoadSample> {
    let mut samples = Vec::new();
    for (j, row) in rows.iter().enumerate() {
        for (i, &value) in row.iter().enumerate() {
            // Exact comparison: padding zeros parse to exactly 0.0.
            if value == threshold {
                continue;
            }
            samples.push(LoadSample {
                cell: Hex::new(i as i32, j as i32),
                center: math::lattice_position(i, j, step),
                value,
                color: colormap::load_color(value),
            });
        }
    }
    samples
}
