//! Transform engine - shape rotation and wall-kick resolution
//!
//! [`rotated_cw`] is pure geometry on the shape matrix; [`attempt_rotate`]
//! is the grid-aware search that decides whether a rotation lands, and
//! where.

use crate::core::collision::collides;
use crate::core::grid::Grid;
use crate::core::pieces::Shape;

/// Produce the 90-degree clockwise rotation of `shape`.
///
/// Transpose + row reversal on the bounding box; no bounds checking, no
/// mutation of the input. Four applications return the original matrix.
pub fn rotated_cw(shape: &Shape) -> Shape {
    let width = shape.width();
    let height = shape.height();

    let mut rows = vec![vec![0; height]; width];
    for y in 0..height {
        for x in 0..width {
            rows[x][height - 1 - y] = shape.get(x, y);
        }
    }
    Shape::from_rows(rows)
}

/// Rotate a piece clockwise at (x, y), kicking horizontally when the rotated
/// shape collides in place.
///
/// Kick steps are cumulative: +1, -2, +3, -4, ... so the positions probed
/// alternate around the original x with growing distance. The search gives
/// up as soon as a step magnitude exceeds the rotated shape's width; the
/// caller then keeps the original shape and position untouched.
///
/// Returns the rotated shape and the accepted x on success, None when the
/// search was abandoned.
pub fn attempt_rotate(grid: &Grid, shape: &Shape, x: i8, y: i8) -> Option<(Shape, i8)> {
    let rotated = rotated_cw(shape);

    let mut kicked_x = x;
    let mut step: i8 = 1;
    while collides(grid, &rotated, kicked_x, y) {
        kicked_x = kicked_x.saturating_add(step);
        step = -(step + step.signum());
        if step as i32 > rotated.width() as i32 {
            return None;
        }
    }

    Some((rotated, kicked_x))
}
