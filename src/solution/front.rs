#[cfg(test)]
#[path = "../../tests/unit/solution/front_test.rs"]
mod front_test;

use crate::algorithms::hypervolume::hypervolume;
use crate::solution::{Fitness, FitnessLimits, ObjectiveComparator, Solution, SolutionSet};
use crate::utils::{Float, GenericResult};
use std::ops::Deref;
use std::sync::Arc;

/// A [`SolutionSet`] maintaining the invariant that no member strictly dominates another.
///
/// A front grown through [`ParetoFront::add_solution_and_update_front`] additionally rejects
/// candidates duplicating a member's candidate object or fitness, while a front extracted from
/// an existing set keeps such duplicates. All read-only set operations are available through
/// deref; mutable set operations are deliberately not exposed as they could break the
/// antichain invariant.
pub struct ParetoFront<S> {
    set: SolutionSet<S>,
}

impl<S> ParetoFront<S> {
    /// Creates an empty front for the given limits.
    pub fn new(limits: Arc<FitnessLimits>) -> Self {
        Self { set: SolutionSet::new(limits) }
    }

    /// Wraps a set whose members are already known to be mutually non-dominating.
    pub(crate) fn from_set(set: SolutionSet<S>) -> Self {
        debug_assert!(!set.iter().any(|solution| set.strictly_dominates(solution.fitness())));

        Self { set }
    }

    /// Consumes the front turning it into a plain solution set.
    pub fn into_solution_set(self) -> SolutionSet<S> {
        self.set
    }

    /// Offers a candidate to the front. The candidate is rejected when an existing member
    /// strictly dominates it, carries the same candidate object, or carries the same fitness
    /// (even for a different object: the front keeps fitness-space diversity, not object-space
    /// diversity). An accepted candidate evicts every member it strictly dominates.
    ///
    /// Returns whether the candidate was added.
    pub fn add_solution_and_update_front(&mut self, object: S, fitness: Fitness) -> GenericResult<bool>
    where
        S: PartialEq,
    {
        if fitness.limits().as_ref() != self.set.limits.as_ref() {
            return Err("fitness limits do not match the limits of the pareto front".into());
        }

        for solution in self.set.iter() {
            if solution.fitness().strictly_dominates(&fitness) {
                return Ok(false);
            }

            if solution.object() == &object || solution.fitness() == &fitness {
                return Ok(false);
            }
        }

        self.set.solutions.retain(|solution| !fitness.strictly_dominates(solution.fitness()));
        self.set.solutions.push(Arc::new(Solution::new(object, fitness)));
        self.set.sorted_by = None;

        Ok(true)
    }

    /// Computes the hypervolume indicator of the front against the given reference fitness: the
    /// measure of the objective-space region dominated by the front and bounded by the reference
    /// point. Members which do not dominate the reference point on every objective are left out;
    /// an empty front yields zero.
    pub fn hypervolume(&self, reference: &Fitness) -> GenericResult<Float> {
        if reference.limits().as_ref() != self.set.limits.as_ref() {
            return Err("reference fitness limits do not match the limits of the pareto front".into());
        }

        if self.set.limits.num_objectives() == 1 {
            // a closed form: the improvement over the reference value along the single objective
            return Ok(match self.set.best_solution(&ObjectiveComparator::new(0)) {
                Some(best) => {
                    (self.set.limits.sign(0) * (best.fitness().value(0) - reference.value(0))).max(0.)
                }
                None => 0.,
            });
        }

        // only members which the reference fails to improve on any axis span a non-empty box
        let points = self
            .set
            .iter()
            .map(|solution| solution.fitness())
            .filter(|fitness| !reference.is_better_for_at_least_one_objective_than(fitness))
            .map(|fitness| fitness.values_to_be_minimized())
            .collect::<Vec<_>>();

        if points.is_empty() {
            return Ok(0.);
        }

        Ok(hypervolume(&points, &reference.values_to_be_minimized()))
    }
}

impl<S> Deref for ParetoFront<S> {
    type Target = SolutionSet<S>;

    fn deref(&self) -> &Self::Target {
        &self.set
    }
}

impl<S> Clone for ParetoFront<S> {
    fn clone(&self) -> Self {
        Self { set: self.set.clone() }
    }
}
