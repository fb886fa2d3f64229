//! Cell frame buffers and the display sink they are emitted to.

use std::io;

use crate::Rgb8;

/// A resolved grid of cell colors, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Rgb8>,
}

impl FrameBuffer {
    /// Create a new frame filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgb8::BLACK; width * height],
        }
    }

    /// Get the cell at (col, row), or `None` when out of range.
    pub fn get(&self, col: usize, row: usize) -> Option<Rgb8> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Same grid dimensions as `other`.
    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Raw RGB bytes, three per cell.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

/// One changed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub color: Rgb8,
}

/// Receiver of changed cells, in row-major order.
pub trait DisplaySink {
    fn put_cell(&mut self, update: CellUpdate) -> io::Result<()>;

    /// Called once after the last update of a frame.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects updates in memory. Used by tests and headless runs.
impl DisplaySink for Vec<CellUpdate> {
    fn put_cell(&mut self, update: CellUpdate) -> io::Result<()> {
        self.push(update);
        Ok(())
    }
}
