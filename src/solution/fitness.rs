#[cfg(test)]
#[path = "../../tests/unit/solution/fitness_test.rs"]
mod fitness_test;

use crate::utils::{compare_floats, Float, GenericResult};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Per-objective `(worst, best)` bounds which define the optimization direction of each objective.
///
/// An objective with `best > worst` is to be maximized, otherwise it is to be minimized. Limits
/// are established once per problem and shared read-only between all fitness values derived from
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct FitnessLimits {
    bounds: Vec<(Float, Float)>,
}

impl FitnessLimits {
    /// Creates limits from `(worst, best)` bounds, one pair per objective.
    pub fn new(bounds: Vec<(Float, Float)>) -> GenericResult<Self> {
        if bounds.is_empty() {
            return Err("fitness limits require at least one objective".into());
        }

        if let Some(idx) =
            bounds.iter().position(|(worst, best)| worst == best || !worst.is_finite() || !best.is_finite())
        {
            return Err(format!("objective {idx} has equal or non-finite worst and best bounds").into());
        }

        Ok(Self { bounds })
    }

    /// Creates limits without bound validation, used for empirical (observed) ranges which are
    /// allowed to be degenerate.
    pub(crate) fn new_unchecked(bounds: Vec<(Float, Float)>) -> Self {
        Self { bounds }
    }

    /// Returns amount of objectives.
    pub fn num_objectives(&self) -> usize {
        self.bounds.len()
    }

    /// Returns the `(worst, best)` bounds of the given objective.
    pub fn bound(&self, objective_idx: usize) -> (Float, Float) {
        self.bounds[objective_idx]
    }

    /// Returns true if the given objective is to be maximized.
    pub fn should_maximize(&self, objective_idx: usize) -> bool {
        let (worst, best) = self.bounds[objective_idx];
        best > worst
    }

    /// Returns the optimization sign of the given objective: `1.` for maximization, `-1.` for
    /// minimization.
    pub fn sign(&self, objective_idx: usize) -> Float {
        if self.should_maximize(objective_idx) {
            1.
        } else {
            -1.
        }
    }
}

/// An immutable vector of objective values tied to the [`FitnessLimits`] it was evaluated
/// against. One fitness is created per evaluated candidate and owned by its
/// [`Solution`](crate::solution::Solution).
#[derive(Clone, Debug)]
pub struct Fitness {
    values: Vec<Float>,
    limits: Arc<FitnessLimits>,
}

impl Fitness {
    /// Creates a fitness from objective values, one per objective of `limits`.
    pub fn new(values: Vec<Float>, limits: Arc<FitnessLimits>) -> GenericResult<Self> {
        if values.len() != limits.num_objectives() {
            return Err(format!(
                "fitness has {} values, but limits define {} objectives",
                values.len(),
                limits.num_objectives()
            )
            .into());
        }

        Ok(Self { values, limits })
    }

    /// Creates the worst possible fitness: either the worst bound of each objective or, when
    /// `use_infinite_values` is set, the infinity in the worsening direction.
    pub fn worst(limits: Arc<FitnessLimits>, use_infinite_values: bool) -> Self {
        let values = (0..limits.num_objectives())
            .map(|idx| {
                if use_infinite_values {
                    -limits.sign(idx) * Float::INFINITY
                } else {
                    limits.bound(idx).0
                }
            })
            .collect();

        Self { values, limits }
    }

    /// Creates the best possible fitness, a counterpart of [`Fitness::worst`].
    pub fn best(limits: Arc<FitnessLimits>, use_infinite_values: bool) -> Self {
        let values = (0..limits.num_objectives())
            .map(|idx| {
                if use_infinite_values {
                    limits.sign(idx) * Float::INFINITY
                } else {
                    limits.bound(idx).1
                }
            })
            .collect();

        Self { values, limits }
    }

    /// Combines two fitnesses taking the worse value of each objective.
    pub fn worst_combination(a: &Fitness, b: &Fitness) -> Fitness {
        debug_assert_eq!(a.limits, b.limits);

        let values = a
            .values
            .iter()
            .zip(b.values.iter())
            .enumerate()
            .map(|(idx, (&left, &right))| if a.limits.sign(idx) * (right - left) > 0. { left } else { right })
            .collect();

        Self { values, limits: a.limits.clone() }
    }

    /// Returns the value of the given objective.
    pub fn value(&self, objective_idx: usize) -> Float {
        self.values[objective_idx]
    }

    /// Returns all objective values.
    pub fn values(&self) -> &[Float] {
        &self.values
    }

    /// Returns the limits this fitness was evaluated against.
    pub fn limits(&self) -> &Arc<FitnessLimits> {
        &self.limits
    }

    /// Compares two fitnesses lexicographically in "to be minimized" space. Both fitnesses must
    /// share the same limits.
    pub fn total_order(&self, other: &Fitness) -> Ordering {
        debug_assert_eq!(self.limits, other.limits);

        self.values
            .iter()
            .zip(other.values.iter())
            .enumerate()
            .map(|(idx, (&a, &b))| {
                if self.limits.should_maximize(idx) {
                    compare_floats(-a, -b)
                } else {
                    compare_floats(a, b)
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Returns true if this fitness is at least as good as `other` on every objective and
    /// strictly better on at least one.
    pub fn strictly_dominates(&self, other: &Fitness) -> bool {
        debug_assert_eq!(self.limits, other.limits);

        let mut has_strictly_better = false;
        for (idx, (&this, &that)) in self.values.iter().zip(other.values.iter()).enumerate() {
            let delta = (that - this) * self.limits.sign(idx);
            if delta > 0. {
                return false;
            } else if delta < 0. {
                has_strictly_better = true;
            }
        }

        has_strictly_better
    }

    /// Returns true if this fitness strictly improves on `other` for at least one objective.
    pub fn is_better_for_at_least_one_objective_than(&self, other: &Fitness) -> bool {
        debug_assert_eq!(self.limits, other.limits);

        self.values
            .iter()
            .zip(other.values.iter())
            .enumerate()
            .any(|(idx, (&this, &that))| (that - this) * self.limits.sign(idx) < 0.)
    }

    /// Returns objective values transformed so that smaller is uniformly better: values of
    /// maximized objectives are negated.
    pub fn values_to_be_minimized(&self) -> Vec<Float> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &value)| if self.limits.should_maximize(idx) { -value } else { value })
            .collect()
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Display for Fitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let values = self.values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "({values})")
    }
}
