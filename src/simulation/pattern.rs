//! Pixel-block body layout.
//!
//! Blocks are laid out three per row. Column 0 sits on the body axis;
//! columns 1 and 2 are drawn on both sides of it, so every body is
//! laterally symmetric. Rows run along the heading.

use serde::{Deserialize, Serialize};

use super::expression::Expression;
use super::gene::BLOCK_COUNT;

/// Blocks per row.
pub const COLUMNS: usize = 3;
/// Rows in the layout grid.
pub const ROWS: usize = BLOCK_COUNT / COLUMNS + 1;

/// A unit square in body coordinates, given by its top-left corner.
///
/// `x` runs along the heading and `y` across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Offset along the heading.
    pub x: f32,
    /// Offset across the heading.
    pub y: f32,
}

/// The unit cells making up an organism's body, built once at birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPattern {
    /// Cells to fill, in block order.
    pub cells: Vec<Cell>,
    /// Packed `0xRRGGBB` fill color.
    pub color: u32,
}

impl BlockPattern {
    /// Lays out the grown blocks of `expression`.
    pub fn from_expression(expression: &Expression) -> Self {
        let half_height = ROWS as f32 / 2.0;
        let mut cells = Vec::with_capacity(BLOCK_COUNT * 2);
        for (i, _) in expression.blocks().iter().enumerate().filter(|(_, b)| **b) {
            let column = (i % COLUMNS) as f32;
            let row = (i / COLUMNS) as f32 - half_height;
            cells.push(Cell {
                x: row - 0.5,
                y: column - 0.5,
            });
            if i % COLUMNS != 0 {
                cells.push(Cell {
                    x: row - 0.5,
                    y: -column - 0.5,
                });
            }
        }
        Self {
            cells,
            color: expression.color(),
        }
    }
}
