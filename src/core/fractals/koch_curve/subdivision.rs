use crate::core::data::point2d::Point2D;

/// A Koch edge from `left` to `right`. `divide` sits on the side the bump
/// must point away from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KochSegment {
    pub left: Point2D,
    pub right: Point2D,
    pub divide: Point2D,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KochPoints {
    /// One third of the way from `left` to `right`.
    pub first: Point2D,
    /// Two thirds of the way from `left` to `right`.
    pub second: Point2D,
    /// Tip of the bump: the edge midpoint pushed away from `divide`.
    pub peak: Point2D,
    /// One third of the way from `left` to `divide`.
    pub left_inner: Point2D,
    /// One third of the way from `right` to `divide`.
    pub right_inner: Point2D,
}

#[must_use]
pub fn koch_points(segment: KochSegment) -> KochPoints {
    let KochSegment {
        left,
        right,
        divide,
    } = segment;
    let middle = left.midpoint(right);

    KochPoints {
        first: Point2D::new((right.x + 2.0 * left.x) / 3.0, (right.y + 2.0 * left.y) / 3.0),
        second: Point2D::new((2.0 * right.x + left.x) / 3.0, (2.0 * right.y + left.y) / 3.0),
        peak: Point2D::new(
            (4.0 * middle.x - divide.x) / 3.0,
            (4.0 * middle.y - divide.y) / 3.0,
        ),
        left_inner: Point2D::new((2.0 * left.x + divide.x) / 3.0, (2.0 * left.y + divide.y) / 3.0),
        right_inner: Point2D::new(
            (2.0 * right.x + divide.x) / 3.0,
            (2.0 * right.y + divide.y) / 3.0,
        ),
    }
}

impl KochPoints {
    /// The four edges replacing `segment`, in drawing order.
    ///
    /// The two bump edges reuse `first`, `second` and `peak` as their own
    /// divide points so their bumps face outwards.
    #[must_use]
    pub fn children(&self, segment: KochSegment) -> [KochSegment; 4] {
        [
            KochSegment {
                left: self.first,
                right: self.peak,
                divide: self.second,
            },
            KochSegment {
                left: self.peak,
                right: self.second,
                divide: self.first,
            },
            KochSegment {
                left: segment.left,
                right: self.first,
                divide: self.left_inner,
            },
            KochSegment {
                left: self.second,
                right: segment.right,
                divide: self.right_inner,
            },
        ]
    }
}
