//! This crate provides building blocks for managing populations of candidate solutions in
//! multi-objective optimization: fitness vectors with per-objective optimization directions,
//! ordered solution sets with sorting and best-selection, fast non-dominated sorting (Pareto
//! ranking), NSGA-II crowding distances, and Pareto fronts with incremental domination pruning
//! and hypervolume computation.
//!
//! The crate itself contains no optimizer: an external evolutionary loop produces candidates,
//! evaluates them into [`Fitness`](crate::solution::Fitness) values and feeds them into a
//! [`SolutionSet`](crate::solution::SolutionSet) or a
//! [`ParetoFront`](crate::solution::ParetoFront), then queries ranks, crowding distances or the
//! hypervolume indicator to drive selection and to report progress.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod solution;
pub mod utils;
