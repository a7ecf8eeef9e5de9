// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grid geometry: fixed column count, square cells, space-between rows.

/// Number of logo columns.
pub const COLUMNS: usize = 5;

/// Grid parameters, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    /// Horizontal padding on each side of the container.
    pub padding: f32,
    /// Smallest horizontal gap between neighbouring cells.
    pub min_gap: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            padding: 16.0,
            min_gap: 8.0,
            row_gap: 16.0,
        }
    }
}

impl GridLayout {
    /// Split items into display rows. Only the last row can be short.
    pub fn rows<'a, T>(&self, items: &'a [T]) -> std::slice::Chunks<'a, T> {
        items.chunks(self.columns.max(1))
    }

    /// CSS width of one cell, so that a full row of cells plus the minimum
    /// gaps exactly fills the container. Rows lay out with space-between,
    /// which pins a short last row to the edges.
    pub fn css_cell_width(&self) -> String {
        let cols = self.columns.max(1);
        let gaps = self.min_gap * (cols - 1) as f32;
        format!("calc((100% - {gaps}px) / {cols})")
    }
}
