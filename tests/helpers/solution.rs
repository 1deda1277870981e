use crate::prelude::*;
use std::sync::Arc;

pub fn create_limits(bounds: &[(Float, Float)]) -> Arc<FitnessLimits> {
    Arc::new(FitnessLimits::new(bounds.to_vec()).unwrap())
}

/// Creates two-objective minimization limits with worst values `(10, 10)` and best `(0, 0)`.
pub fn create_minimization_limits() -> Arc<FitnessLimits> {
    create_limits(&[(10., 0.), (10., 0.)])
}

pub fn create_fitness(values: &[Float], limits: &Arc<FitnessLimits>) -> Fitness {
    Fitness::new(values.to_vec(), limits.clone()).unwrap()
}

/// Creates a set of solutions with given fitness values, using the member index as the object.
pub fn create_solution_set(limits: &Arc<FitnessLimits>, fitness_values: &[&[Float]]) -> SolutionSet<usize> {
    let mut set = SolutionSet::new(limits.clone());
    for (idx, values) in fitness_values.iter().enumerate() {
        set.add_solution(idx, create_fitness(values, limits)).unwrap();
    }

    set
}
