//! This module reimports the commonly used types.

pub use crate::solution::Fitness;
pub use crate::solution::FitnessLimits;
pub use crate::solution::ParetoFront;
pub use crate::solution::Solution;
pub use crate::solution::SolutionSet;

pub use crate::solution::BoundComparator;
pub use crate::solution::ComparatorId;
pub use crate::solution::DominanceComparator;
pub use crate::solution::LexicographicComparator;
pub use crate::solution::ObjectiveComparator;
pub use crate::solution::ParetoRankAndCrowdingComparator;
pub use crate::solution::SolutionComparator;

pub use crate::algorithms::hypervolume::hypervolume;

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::{GenericError, GenericResult};
