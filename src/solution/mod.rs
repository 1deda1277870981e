//! This module contains containers for evaluated solutions: fitness vectors with optimization
//! directions, ordered solution sets with ranking and selection algorithms, and Pareto fronts.

mod comparator;
pub use self::comparator::*;

mod fitness;
pub use self::fitness::*;

mod front;
pub use self::front::*;

mod set;
pub use self::set::*;

mod solution;
pub use self::solution::*;
