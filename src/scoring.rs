//! Scoring: pure function from a clear event to points.
//!
//! Base is 10 points per cleared cell. Clearing two or more areas with one
//! placement earns a multiplier of `1 + (areas - 1) * 0.5` (2 areas = 1.5x,
//! 3 = 2.0x, 4 = 2.5x, ...), and the product is floored.

use crate::board::CompletedAreas;

/// Points for a clear of `cleared_count` cells across `completed` areas.
///
/// ```
/// use nexel_core::board::CompletedAreas;
/// use nexel_core::scoring::score;
///
/// let mut completed = CompletedAreas::default();
/// completed.rows.push(0);
/// assert_eq!(score(9, &completed), 90);
///
/// completed.cols.push(0);
/// assert_eq!(score(17, &completed), 255); // floor(170 * 1.5)
/// ```
#[must_use]
pub fn score(cleared_count: usize, completed: &CompletedAreas) -> u32 {
    let base = cleared_count as u32 * 10;
    let area_count = completed.area_count();

    if area_count < 2 {
        return base;
    }

    let multiplier = 1.0 + (area_count as f64 - 1.0) * 0.5;
    (f64::from(base) * multiplier).floor() as u32
}
