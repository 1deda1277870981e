//! Comparator strategies used to order members of a [`SolutionSet`] by index.
//!
//! A comparator is used in two phases: it is first bound to a concrete set, which precomputes
//! whatever the comparison needs (e.g. Pareto ranks and crowding distances), and the resulting
//! bound comparator then answers index-based comparisons against that set only. A bound
//! comparator must not outlive the set it was bound to and must not be reused for another set.

#[cfg(test)]
#[path = "../../tests/unit/solution/comparator_test.rs"]
mod comparator_test;

use crate::solution::SolutionSet;
use crate::utils::{compare_floats, Float};
use std::cmp::Ordering;

/// Identifies a comparator by its logic and parameters rather than by instance identity.
///
/// Solution sets memoize the id of the comparator they were last sorted by, so two instances
/// with the same id hit the re-sort fast path interchangeably.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComparatorId {
    /// Comparison by a single objective value.
    Objective(usize),
    /// Lexicographic comparison over all objectives.
    Lexicographic,
    /// Comparison by the Pareto dominance relation.
    Dominance,
    /// Comparison by Pareto rank, then by crowding distance.
    ParetoRankAndCrowding,
}

/// A strategy which compares two members of a solution set by their indices.
pub trait SolutionComparator<S> {
    /// Returns the descriptor of this comparator used for sort memoization.
    fn id(&self) -> ComparatorId;

    /// Binds the comparator to the given set, precomputing whatever the comparison needs.
    fn bind<'a>(&self, set: &'a SolutionSet<S>) -> Box<dyn BoundComparator + 'a>;
}

/// A comparator bound to a concrete solution set, comparing members by index.
pub trait BoundComparator {
    /// Compares members at the given indices: `Less` means the first member is the better one
    /// and should sort earlier.
    fn compare(&self, i: usize, j: usize) -> Ordering;
}

/// Compares solutions by the raw value of a single objective, respecting its optimization
/// direction: the better value sorts first.
pub struct ObjectiveComparator {
    objective_idx: usize,
}

impl ObjectiveComparator {
    /// Creates a comparator for the given objective.
    pub fn new(objective_idx: usize) -> Self {
        Self { objective_idx }
    }
}

impl<S> SolutionComparator<S> for ObjectiveComparator {
    fn id(&self) -> ComparatorId {
        ComparatorId::Objective(self.objective_idx)
    }

    fn bind<'a>(&self, set: &'a SolutionSet<S>) -> Box<dyn BoundComparator + 'a> {
        let sign = set.limits().sign(self.objective_idx);
        Box::new(BoundObjective { set, objective_idx: self.objective_idx, sign })
    }
}

struct BoundObjective<'a, S> {
    set: &'a SolutionSet<S>,
    objective_idx: usize,
    sign: Float,
}

impl<S> BoundComparator for BoundObjective<'_, S> {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        // negating by the sign turns both directions into minimization
        let a = -self.sign * self.set.fitness(i).value(self.objective_idx);
        let b = -self.sign * self.set.fitness(j).value(self.objective_idx);

        compare_floats(a, b)
    }
}

/// Compares solutions lexicographically over all objectives in "to be minimized" space.
pub struct LexicographicComparator;

impl<S> SolutionComparator<S> for LexicographicComparator {
    fn id(&self) -> ComparatorId {
        ComparatorId::Lexicographic
    }

    fn bind<'a>(&self, set: &'a SolutionSet<S>) -> Box<dyn BoundComparator + 'a> {
        Box::new(BoundLexicographic { set })
    }
}

struct BoundLexicographic<'a, S> {
    set: &'a SolutionSet<S>,
}

impl<S> BoundComparator for BoundLexicographic<'_, S> {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.set.fitness(i).total_order(self.set.fitness(j))
    }
}

/// Compares solutions by the Pareto dominance relation: `Less` if the first strictly dominates
/// the second, `Greater` for the opposite, `Equal` when neither dominates (including ties).
pub struct DominanceComparator;

impl<S> SolutionComparator<S> for DominanceComparator {
    fn id(&self) -> ComparatorId {
        ComparatorId::Dominance
    }

    fn bind<'a>(&self, set: &'a SolutionSet<S>) -> Box<dyn BoundComparator + 'a> {
        Box::new(BoundDominance { set })
    }
}

struct BoundDominance<'a, S> {
    set: &'a SolutionSet<S>,
}

impl<S> BoundComparator for BoundDominance<'_, S> {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.set.fitness(i), self.set.fitness(j));

        if a.strictly_dominates(b) {
            Ordering::Less
        } else if b.strictly_dominates(a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Compares solutions by Pareto rank ascending, breaking ties by crowding distance descending,
/// as NSGA-II does for survivor and leader selection. Binding precomputes ranks and crowding
/// distances of the whole set.
pub struct ParetoRankAndCrowdingComparator;

impl<S: Send + Sync> SolutionComparator<S> for ParetoRankAndCrowdingComparator {
    fn id(&self) -> ComparatorId {
        ComparatorId::ParetoRankAndCrowding
    }

    fn bind<'a>(&self, set: &'a SolutionSet<S>) -> Box<dyn BoundComparator + 'a> {
        let (mapping, _) = set.compute_pareto_ranks();
        let ranks = mapping.into_iter().map(|(rank, _)| rank).collect();
        let crowding_distances = set.compute_crowding_distances();

        Box::new(BoundParetoRankAndCrowding { ranks, crowding_distances })
    }
}

struct BoundParetoRankAndCrowding {
    ranks: Vec<usize>,
    crowding_distances: Vec<Float>,
}

impl BoundComparator for BoundParetoRankAndCrowding {
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.ranks[i]
            .cmp(&self.ranks[j])
            .then_with(|| compare_floats(self.crowding_distances[j], self.crowding_distances[i]))
    }
}
