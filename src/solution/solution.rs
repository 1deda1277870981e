use crate::solution::Fitness;

/// Pairs an opaque candidate object with its evaluated [`Fitness`].
///
/// A solution is immutable once created, so it can be shared between multiple sets (e.g. an
/// archive and a per-generation population) behind an `Arc` without synchronization.
#[derive(Clone, Debug)]
pub struct Solution<S> {
    object: S,
    fitness: Fitness,
}

impl<S> Solution<S> {
    /// Creates a solution from a candidate object and its fitness.
    pub fn new(object: S, fitness: Fitness) -> Self {
        Self { object, fitness }
    }

    /// Returns the candidate object.
    pub fn object(&self) -> &S {
        &self.object
    }

    /// Returns the fitness of the candidate.
    pub fn fitness(&self) -> &Fitness {
        &self.fitness
    }
}
