use super::layout::Derived;

/// Sorted landmark arrays and the bounding extent of a pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Markings {
    pub x_sorted: [f64; 11],
    pub y_sorted: [f64; 4],
    /// `[xmin, xmax, ymin, ymax]` in display order.
    pub extent: [f64; 4],
}

/// Shared finishing step run after every layout's derivation.
///
/// The x-landmarks are listed in anatomical order from the left back line to
/// the right back line; the layouts guarantee that this order is ascending.
/// The y-landmarks follow the same rule, except under `invert_y` where the
/// bottom edge carries the largest value and the array is re-sorted.
pub(crate) fn finish(d: &Derived, invert_y: bool) -> Markings {
    let x_sorted = [
        d.left,
        d.penalty_area_left,
        d.post_left,
        d.penalty_left,
        d.freepass_left,
        d.center_length,
        d.freepass_right,
        d.penalty_right,
        d.post_right,
        d.penalty_area_right,
        d.right,
    ];

    let mut y_sorted = [d.bottom, d.penalty_area_bottom, d.penalty_area_top, d.top];

    let extent = if invert_y {
        y_sorted.sort_by(f64::total_cmp);
        [d.left, d.right, d.top, d.bottom]
    } else {
        [d.left, d.right, d.bottom, d.top]
    };

    Markings {
        x_sorted,
        y_sorted,
        extent,
    }
}
