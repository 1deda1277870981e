#[cfg(test)]
#[path = "../../tests/unit/solution/set_test.rs"]
mod set_test;

use crate::solution::{
    ComparatorId, Fitness, FitnessLimits, ObjectiveComparator, ParetoFront, Solution, SolutionComparator,
};
use crate::utils::{parallel_collect, Float, GenericResult};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// An ordered collection of solutions sharing the same [`FitnessLimits`].
///
/// The set supports sorting by a pluggable [`SolutionComparator`], best-solution selection,
/// fast non-dominated sorting into Pareto ranks and NSGA-II crowding distance computation. The
/// id of the comparator the set was last sorted by is memoized and invalidated by any mutation,
/// so a repeated sort with an equally parameterized comparator is a no-op.
///
/// All operations run synchronously on the calling thread; concurrent mutation of a shared set
/// must be serialized by the caller.
pub struct SolutionSet<S> {
    pub(crate) limits: Arc<FitnessLimits>,
    pub(crate) solutions: Vec<Arc<Solution<S>>>,
    pub(crate) sorted_by: Option<ComparatorId>,
}

impl<S> SolutionSet<S> {
    /// Creates an empty set for the given limits.
    pub fn new(limits: Arc<FitnessLimits>) -> Self {
        Self { limits, solutions: Vec::new(), sorted_by: None }
    }

    /// Creates a set from already evaluated solutions.
    pub fn with_solutions(limits: Arc<FitnessLimits>, solutions: Vec<Arc<Solution<S>>>) -> GenericResult<Self> {
        let mut set = Self::new(limits);
        for solution in solutions {
            set.add(solution)?;
        }

        Ok(set)
    }

    /// Returns the limits shared by all members.
    pub fn limits(&self) -> &Arc<FitnessLimits> {
        &self.limits
    }

    /// Returns amount of solutions in the set.
    pub fn size(&self) -> usize {
        self.solutions.len()
    }

    /// Returns true if the set has no solutions.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns the solution at the given index, if any.
    pub fn get(&self, index: usize) -> Option<&Arc<Solution<S>>> {
        self.solutions.get(index)
    }

    /// Returns the fitness of the solution at the given index.
    ///
    /// # Panics
    ///
    /// Panics when index is out of bounds.
    pub fn fitness(&self, index: usize) -> &Fitness {
        self.solutions[index].fitness()
    }

    /// Iterates over the solutions of the set in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Solution<S>>> {
        self.solutions.iter()
    }

    /// Iterates over the candidate objects of the set in their current order.
    pub fn objects(&self) -> impl Iterator<Item = &S> {
        self.solutions.iter().map(|solution| solution.object())
    }

    /// Returns the id of the comparator the set is currently sorted by, if any.
    pub fn sorted_by(&self) -> Option<ComparatorId> {
        self.sorted_by
    }

    /// Appends an already shared solution, invalidating the sort memoization.
    pub fn add(&mut self, solution: Arc<Solution<S>>) -> GenericResult<()> {
        self.ensure_limits(solution.fitness())?;

        self.solutions.push(solution);
        self.sorted_by = None;

        Ok(())
    }

    /// Appends a candidate object with its fitness, invalidating the sort memoization.
    pub fn add_solution(&mut self, object: S, fitness: Fitness) -> GenericResult<()> {
        self.add(Arc::new(Solution::new(object, fitness)))
    }

    /// Appends every solution of `other` sharing the solution instances, invalidating the sort
    /// memoization.
    pub fn add_solutions(&mut self, other: &SolutionSet<S>) -> GenericResult<()> {
        if self.limits.as_ref() != other.limits.as_ref() {
            return Err("cannot merge solution sets with different limits".into());
        }

        self.solutions.extend(other.solutions.iter().cloned());
        self.sorted_by = None;

        Ok(())
    }

    /// Returns a new set with the same solutions reordered from the most preferred to the least
    /// preferred one according to the comparator. When the set is already sorted by an equally
    /// parameterized comparator, returns a cheap copy preserving the current order.
    pub fn sort(&self, comparator: &dyn SolutionComparator<S>) -> Self {
        let mut mapping = Vec::new();
        self.sort_with_mapping(comparator, &mut mapping)
    }

    /// Same as [`SolutionSet::sort`], but additionally fills `mapping` with the applied
    /// permutation: `mapping[new_index] == old_index`.
    pub fn sort_with_mapping(&self, comparator: &dyn SolutionComparator<S>, mapping: &mut Vec<usize>) -> Self {
        mapping.clear();
        mapping.extend(0..self.size());

        if self.sorted_by == Some(comparator.id()) {
            return self.clone();
        }

        let bound = comparator.bind(self);
        mapping.sort_by(|&i, &j| bound.compare(i, j));

        Self {
            limits: self.limits.clone(),
            solutions: mapping.iter().map(|&idx| self.solutions[idx].clone()).collect(),
            sorted_by: Some(comparator.id()),
        }
    }

    /// Returns the index of the best solution according to the comparator, `None` for an empty
    /// set. Ties are broken towards the first encountered member.
    pub fn find_best_solution(&self, comparator: &dyn SolutionComparator<S>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        if self.sorted_by == Some(comparator.id()) {
            // already sorted: the best is at the first position
            return Some(0);
        }

        let bound = comparator.bind(self);
        let mut best_idx = 0;
        for idx in 1..self.size() {
            if bound.compare(idx, best_idx) == std::cmp::Ordering::Less {
                best_idx = idx;
            }
        }

        Some(best_idx)
    }

    /// Returns the best solution according to the comparator, `None` for an empty set.
    pub fn best_solution(&self, comparator: &dyn SolutionComparator<S>) -> Option<&Arc<Solution<S>>> {
        self.find_best_solution(comparator).and_then(|idx| self.solutions.get(idx))
    }

    /// Returns a set with the `n` best solutions according to the comparator. When `n` covers
    /// the whole set, returns a cheap copy preserving the current order.
    pub fn select_n_bests(&self, comparator: &dyn SolutionComparator<S>, n: usize) -> Self {
        if n >= self.size() {
            return self.clone();
        }

        let mut sorted = self.sort(comparator);
        sorted.solutions.truncate(n);

        sorted
    }

    /// Returns per-objective observed `(worst, best)` value ranges across all members, oriented
    /// by each objective's optimization direction. Unlike the theoretical limits, the returned
    /// ranges may be degenerate (equal bounds); they are meant for normalization and reporting.
    pub fn empirical_limits(&self) -> FitnessLimits {
        let num_objectives = self.limits.num_objectives();
        let mut ranges = vec![(Float::MAX, -Float::MAX); num_objectives];

        for solution in self.solutions.iter() {
            let fitness = solution.fitness();
            for (idx, range) in ranges.iter_mut().enumerate() {
                let value = fitness.value(idx);
                range.0 = range.0.min(value);
                range.1 = range.1.max(value);
            }
        }

        let bounds = ranges
            .into_iter()
            .enumerate()
            .map(|(idx, (min, max))| if self.limits.should_maximize(idx) { (min, max) } else { (max, min) })
            .collect();

        FitnessLimits::new_unchecked(bounds)
    }

    /// Returns true if any member's fitness strictly dominates the given fitness.
    pub fn strictly_dominates(&self, fitness: &Fitness) -> bool {
        self.solutions.iter().any(|solution| solution.fitness().strictly_dominates(fitness))
    }

    /// Filters the set to its members which are not strictly dominated by any other member, the
    /// maximal antichain under the dominance relation.
    pub fn pareto_front(&self) -> ParetoFront<S> {
        let solutions = self
            .solutions
            .iter()
            .filter(|solution| !self.strictly_dominates(solution.fitness()))
            .cloned()
            .collect();

        ParetoFront::from_set(Self { limits: self.limits.clone(), solutions, sorted_by: self.sorted_by })
    }

    /// Computes Pareto ranks of all members using the fast non-dominated sort algorithm: rank 0
    /// contains members dominated by nobody, rank `k + 1` contains members whose dominators all
    /// have rank `k` or less.
    ///
    /// Returns a `(rank, position within rank)` pair per member plus the amount of members per
    /// rank. Both are empty for an empty set.
    pub fn compute_pareto_ranks(&self) -> (Vec<(usize, usize)>, Vec<usize>)
    where
        S: Send + Sync,
    {
        let n = self.size();
        if n == 0 {
            return (Vec::new(), Vec::new());
        }

        let indices = (0..n).collect::<Vec<_>>();

        // pairwise dominance bookkeeping: who do I dominate and by how many am I dominated
        let dominance = parallel_collect(&indices, |&i| {
            let mut dominated_indices = Vec::new();
            let mut domination_counter = 0;

            for j in 0..n {
                if i == j {
                    continue;
                }

                let (a, b) = (self.fitness(i), self.fitness(j));
                if a.strictly_dominates(b) {
                    dominated_indices.push(j);
                } else if b.strictly_dominates(a) {
                    domination_counter += 1;
                }
            }

            (dominated_indices, domination_counter)
        });

        let (dominated_indices, mut domination_counters): (Vec<_>, Vec<_>) = dominance.into_iter().unzip();

        let mut mapping = vec![(0, 0); n];
        let mut count_per_rank = Vec::new();

        let mut current_front = Vec::new();
        for (idx, _) in domination_counters.iter().enumerate().filter(|(_, counter)| **counter == 0) {
            mapping[idx] = (0, current_front.len());
            current_front.push(idx);
        }

        debug_assert!(!current_front.is_empty());
        count_per_rank.push(current_front.len());

        // peel fronts one by one decrementing counters of dominated members
        for current_rank in 1.. {
            let mut next_front = Vec::new();
            for &front_idx in current_front.iter() {
                for &idx in dominated_indices[front_idx].iter() {
                    debug_assert!(domination_counters[idx] > 0);
                    domination_counters[idx] -= 1;
                    if domination_counters[idx] == 0 {
                        mapping[idx] = (current_rank, next_front.len());
                        next_front.push(idx);
                    }
                }
            }

            if next_front.is_empty() {
                break;
            }

            count_per_rank.push(next_front.len());
            current_front = next_front;
        }

        debug_assert_eq!(count_per_rank.iter().sum::<usize>(), n);

        (mapping, count_per_rank)
    }

    /// Splits the set into one Pareto front per rank, in rank order: the first front is the
    /// global Pareto front of the set.
    pub fn non_dominated_sort(&self) -> Vec<ParetoFront<S>>
    where
        S: Send + Sync,
    {
        let (mapping, count_per_rank) = self.compute_pareto_ranks();

        let mut fronts = count_per_rank
            .iter()
            .map(|&count| {
                let mut set = Self::new(self.limits.clone());
                set.solutions.reserve(count);
                set.sorted_by = self.sorted_by;
                set
            })
            .collect::<Vec<_>>();

        for (idx, &(rank, _)) in mapping.iter().enumerate() {
            fronts[rank].solutions.push(self.solutions[idx].clone());
        }

        fronts.into_iter().map(ParetoFront::from_set).collect()
    }

    /// Computes the NSGA-II crowding distance of every member: for each objective, members are
    /// sorted by that objective, the extremes get an infinite distance and every interior member
    /// accumulates the objective range covered by its direct neighbors, normalized by the
    /// objective's observed range.
    ///
    /// Sets of up to two members get infinite distances everywhere. An objective with a zero
    /// observed range (constant across the set) contributes nothing to interior members.
    pub fn compute_crowding_distances(&self) -> Vec<Float> {
        let n = self.size();
        if n <= 2 {
            return vec![Float::INFINITY; n];
        }

        let mut distances = vec![0.; n];

        for objective_idx in 0..self.limits.num_objectives() {
            let mut mapping = Vec::new();
            let ordered = self.sort_with_mapping(&ObjectiveComparator::new(objective_idx), &mut mapping);

            let best_value = ordered.fitness(0).value(objective_idx);
            let worst_value = ordered.fitness(n - 1).value(objective_idx);

            distances[mapping[0]] = Float::INFINITY;
            distances[mapping[n - 1]] = Float::INFINITY;

            // a constant objective carries no density information
            let range = worst_value - best_value;
            if range.abs() > 0. {
                let inv_range = 1. / range;
                for position in 1..n - 1 {
                    let spread = ordered.fitness(position + 1).value(objective_idx)
                        - ordered.fitness(position - 1).value(objective_idx);
                    distances[mapping[position]] += spread * inv_range;
                }
            }
        }

        distances
    }

    fn ensure_limits(&self, fitness: &Fitness) -> GenericResult<()> {
        if fitness.limits().as_ref() != self.limits.as_ref() {
            return Err("fitness limits do not match the limits of the solution set".into());
        }

        Ok(())
    }
}

impl<S> Clone for SolutionSet<S> {
    fn clone(&self) -> Self {
        Self { limits: self.limits.clone(), solutions: self.solutions.clone(), sorted_by: self.sorted_by }
    }
}

impl<S> Display for SolutionSet<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fitness =
            self.solutions.iter().map(|solution| solution.fitness().to_string()).collect::<Vec<_>>().join(",");

        write!(f, "[{fitness}]")
    }
}
