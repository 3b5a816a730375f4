use crate::core::data::point2d::Point2D;

/// Triangle corners. The names are positional only: the seed passes its
/// apex as `left`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleVertices {
    pub left: Point2D,
    pub right: Point2D,
    pub upper: Point2D,
}

impl TriangleVertices {
    #[must_use]
    pub fn to_array(self) -> [Point2D; 3] {
        [self.left, self.right, self.upper]
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleMidpoints {
    pub left_upper: Point2D,
    pub right_upper: Point2D,
    pub left_right: Point2D,
}

#[must_use]
pub fn triangle_midpoints(triangle: TriangleVertices) -> TriangleMidpoints {
    TriangleMidpoints {
        left_upper: triangle.left.midpoint(triangle.upper),
        right_upper: triangle.right.midpoint(triangle.upper),
        left_right: triangle.left.midpoint(triangle.right),
    }
}

impl TriangleMidpoints {
    /// The inverted middle triangle that gets cut out.
    #[must_use]
    pub fn centre(&self) -> [Point2D; 3] {
        [self.left_upper, self.right_upper, self.left_right]
    }

    /// The three corner triangles, recursed into in this order.
    #[must_use]
    pub fn children(&self, triangle: TriangleVertices) -> [TriangleVertices; 3] {
        [
            TriangleVertices {
                left: triangle.upper,
                right: self.left_upper,
                upper: self.right_upper,
            },
            TriangleVertices {
                left: self.left_upper,
                right: triangle.left,
                upper: self.left_right,
            },
            TriangleVertices {
                left: self.right_upper,
                right: self.left_right,
                upper: triangle.right,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seed() -> TriangleVertices {
        TriangleVertices {
            left: Point2D::new(275.0, 5.0),
            right: Point2D::new(50.0, 400.0),
            upper: Point2D::new(500.0, 400.0),
        }
    }

    #[test]
    fn test_midpoints_of_seed() {
        let midpoints = triangle_midpoints(seed());

        assert_eq!(midpoints.left_upper, Point2D::new(387.5, 202.5));
        assert_eq!(midpoints.right_upper, Point2D::new(275.0, 400.0));
        assert_eq!(midpoints.left_right, Point2D::new(162.5, 202.5));
    }

    #[test]
    fn test_children_order() {
        let triangle = seed();
        let m = triangle_midpoints(triangle);

        assert_eq!(
            m.children(triangle),
            [
                TriangleVertices {
                    left: triangle.upper,
                    right: m.left_upper,
                    upper: m.right_upper,
                },
                TriangleVertices {
                    left: m.left_upper,
                    right: triangle.left,
                    upper: m.left_right,
                },
                TriangleVertices {
                    left: m.right_upper,
                    right: m.left_right,
                    upper: triangle.right,
                },
            ]
        );
    }

    #[test]
    fn test_children_share_corners_with_parent() {
        let triangle = seed();
        let corners: Vec<Point2D> = triangle_midpoints(triangle)
            .children(triangle)
            .iter()
            .flat_map(|child| child.to_array())
            .collect();

        for corner in triangle.to_array() {
            assert_eq!(corners.iter().filter(|&&p| p == corner).count(), 1);
        }
    }

    fn point() -> impl Strategy<Value = Point2D> {
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point2D::new(x, y))
    }

    proptest! {
        #[test]
        fn midpoints_stay_in_the_bounding_box(left in point(), right in point(), upper in point()) {
            let midpoints = triangle_midpoints(TriangleVertices { left, right, upper });
            let min_x = left.x.min(right.x).min(upper.x);
            let max_x = left.x.max(right.x).max(upper.x);
            let min_y = left.y.min(right.y).min(upper.y);
            let max_y = left.y.max(right.y).max(upper.y);

            for p in midpoints.centre() {
                prop_assert!(min_x <= p.x && p.x <= max_x, "{:?} outside x range", p);
                prop_assert!(min_y <= p.y && p.y <= max_y, "{:?} outside y range", p);
            }
        }
    }
}
