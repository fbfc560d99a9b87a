//! Regular sampling grid over the canvas.

use crate::geometry::Point2D;

/// Grid points `(x, y)` for `x` in `[spacing, width)` and `y` in
/// `[spacing, height)`, both stepping by `spacing`.
///
/// The grid starts one step inside the top-left edge. Points are ordered
/// column by column (x outer, y inner). A zero `spacing` yields no points.
pub fn generate_grid(width: usize, height: usize, spacing: usize) -> Vec<Point2D> {
    if spacing == 0 {
        return Vec::new();
    }
    (spacing..width)
        .step_by(spacing)
        .flat_map(|x| {
            (spacing..height)
                .step_by(spacing)
                .map(move |y| Point2D::new(x as f64, y as f64))
        })
        .collect()
}

/// Number of points [`generate_grid`] would produce, without allocating.
pub fn grid_len(width: usize, height: usize, spacing: usize) -> usize {
    if spacing == 0 {
        return 0;
    }
    let steps = |extent: usize| extent.saturating_sub(1) / spacing;
    steps(width) * steps(height)
}
