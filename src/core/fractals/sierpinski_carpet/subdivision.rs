use crate::core::data::point2d::Point2D;

/// An axis-aligned square given by its top-left corner and side length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarpetCell {
    pub origin: Point2D,
    pub side: f64,
}

impl CarpetCell {
    /// Corners clockwise on screen, starting at the origin.
    #[must_use]
    pub fn vertices(&self) -> [Point2D; 4] {
        let Point2D { x, y } = self.origin;
        let side = self.side;

        [
            Point2D::new(x, y),
            Point2D::new(x + side, y),
            Point2D::new(x + side, y + side),
            Point2D::new(x, y + side),
        ]
    }
}

/// The 3x3 split of a [`CarpetCell`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarpetGrid {
    /// Left edges of the three columns.
    pub xs: [f64; 3],
    /// Top edges of the three rows.
    pub ys: [f64; 3],
    /// Side length shared by all nine sub-cells.
    pub cell: f64,
}

#[must_use]
pub fn carpet_grid(cell: CarpetCell) -> CarpetGrid {
    let width = cell.side / 3.0;
    let Point2D { x, y } = cell.origin;

    CarpetGrid {
        xs: [x, width + x, width * 2.0 + x],
        ys: [y, y + width, y + width * 2.0],
        cell: width,
    }
}

impl CarpetGrid {
    fn at(&self, column: usize, row: usize) -> CarpetCell {
        CarpetCell {
            origin: Point2D::new(self.xs[column], self.ys[row]),
            side: self.cell,
        }
    }

    /// The middle sub-cell, which is cut out rather than recursed into.
    #[must_use]
    pub fn centre(&self) -> CarpetCell {
        self.at(1, 1)
    }

    /// The eight outer sub-cells, row by row.
    #[must_use]
    pub fn children(&self) -> [CarpetCell; 8] {
        [
            self.at(0, 0),
            self.at(1, 0),
            self.at(2, 0),
            self.at(0, 1),
            self.at(2, 1),
            self.at(0, 2),
            self.at(1, 2),
            self.at(2, 2),
        ]
    }
}
