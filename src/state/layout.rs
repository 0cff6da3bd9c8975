/// Responsive grid placement
///
/// Geometry is computed here, apart from any widget, so it can be
/// checked without a window. The view only turns the result into rows.

use crate::config::SLOT_WIDTH;

/// Grid cell of one tile.
/// Columns start at 1: column 0 and `columns + 1` are the flexible
/// spacers that centre the block of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// Placement of every tile for a given container width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of tile columns, not counting the two spacers
    pub columns: usize,
    /// One entry per tile, in tile order
    pub placements: Vec<Placement>,
}

/// `max(1, floor(width / SLOT_WIDTH))`
pub fn column_count(container_width: f32) -> usize {
    if !container_width.is_finite() || container_width <= 0.0 {
        return 1;
    }
    ((container_width / SLOT_WIDTH).floor() as usize).max(1)
}

/// Lay out `tile_count` tiles for a container `container_width` wide
pub fn layout(tile_count: usize, container_width: f32) -> GridLayout {
    let columns = column_count(container_width);

    let placements = (0..tile_count)
        .map(|index| Placement {
            row: index / columns,
            column: index % columns + 1,
        })
        .collect();

    GridLayout {
        columns,
        placements,
    }
}

impl GridLayout {
    pub fn row_count(&self) -> usize {
        self.placements.len().div_ceil(self.columns)
    }

    /// The two columns that absorb extra horizontal space
    #[cfg(test)]
    pub fn spacer_columns(&self) -> (usize, usize) {
        (0, self.columns + 1)
    }

    /// Tile indices per row, one slot per tile column.
    /// Slots past the last tile are `None`.
    pub fn rows(&self) -> Vec<Vec<Option<usize>>> {
        let mut rows = vec![vec![None; self.columns]; self.row_count()];
        for (index, placement) in self.placements.iter().enumerate() {
            rows[placement.row][placement.column - 1] = Some(index);
        }
        rows
    }
}
