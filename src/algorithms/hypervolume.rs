//! An exact hypervolume computation in "to be minimized" space using the slicing objectives
//! approach: the dominated region is cut into slabs along the last objective and each slab's
//! measure is the slab depth times the hypervolume of the remaining objectives.
//!
//! The computation is exponential in the number of objectives in the worst case, which is
//! acceptable for its intended use as a reporting and convergence metric on small fronts.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/hypervolume_test.rs"]
mod hypervolume_test;

use crate::utils::{compare_floats, Float};

/// Computes the hypervolume dominated by `points` and bounded by `reference`.
///
/// All values are expected in minimization space: a point contributes the box between itself
/// and the reference on the axes where it is below the reference. Points or axes beyond the
/// reference contribute nothing.
pub fn hypervolume(points: &[Vec<Float>], reference: &[Float]) -> Float {
    debug_assert!(points.iter().all(|point| point.len() == reference.len()));

    measure(points.to_vec(), reference)
}

fn measure(mut points: Vec<Vec<Float>>, reference: &[Float]) -> Float {
    if points.is_empty() {
        return 0.;
    }

    if reference.len() == 1 {
        let best = points.iter().map(|point| point[0]).fold(Float::INFINITY, Float::min);
        return (reference[0] - best).max(0.);
    }

    let last = reference.len() - 1;
    points.sort_by(|a, b| compare_floats(a[last], b[last]));

    let mut volume = 0.;
    for idx in 0..points.len() {
        let lower = points[idx][last];
        let upper = if idx + 1 < points.len() { points[idx + 1][last].min(reference[last]) } else { reference[last] };

        let depth = upper - lower;
        if depth > 0. {
            // all points up to this slab are active within it, projected to the remaining axes
            let projected = points[..=idx].iter().map(|point| point[..last].to_vec()).collect::<Vec<_>>();
            volume += depth * measure(projected, &reference[..last]);
        }
    }

    volume
}
