use super::*;
use crate::helpers::solution::*;

#[test]
fn can_compare_comparators_by_descriptor() {
    assert_eq!(ComparatorId::Objective(1), ComparatorId::Objective(1));
    assert_ne!(ComparatorId::Objective(0), ComparatorId::Objective(1));
    assert_ne!(ComparatorId::Dominance, ComparatorId::Lexicographic);

    let first: &dyn SolutionComparator<usize> = &ObjectiveComparator::new(2);
    let second: &dyn SolutionComparator<usize> = &ObjectiveComparator::new(2);
    assert_eq!(first.id(), second.id());
}

#[test]
fn can_compare_by_single_objective() {
    // first objective is maximized, second is minimized
    let limits = create_limits(&[(0., 1.), (10., 0.)]);
    let set = create_solution_set(&limits, &[&[1., 4.], &[2., 3.]]);

    let by_first = ObjectiveComparator::new(0).bind(&set);
    assert_eq!(by_first.compare(0, 1), Ordering::Greater);
    assert_eq!(by_first.compare(1, 0), Ordering::Less);
    assert_eq!(by_first.compare(0, 0), Ordering::Equal);

    let by_second = ObjectiveComparator::new(1).bind(&set);
    assert_eq!(by_second.compare(0, 1), Ordering::Greater);
    assert_eq!(by_second.compare(1, 0), Ordering::Less);
}

#[test]
fn can_compare_by_dominance() {
    let limits = create_minimization_limits();
    let set = create_solution_set(&limits, &[&[2., 2.], &[3., 3.], &[1., 5.]]);

    let bound = DominanceComparator.bind(&set);
    assert_eq!(bound.compare(0, 1), Ordering::Less);
    assert_eq!(bound.compare(1, 0), Ordering::Greater);
    assert_eq!(bound.compare(0, 2), Ordering::Equal);
    assert_eq!(bound.compare(2, 1), Ordering::Equal);
}

#[test]
fn can_compare_lexicographically_bound() {
    let limits = create_minimization_limits();
    let set = create_solution_set(&limits, &[&[2., 9.], &[2., 3.]]);

    let bound = LexicographicComparator.bind(&set);
    assert_eq!(bound.compare(0, 1), Ordering::Greater);
    assert_eq!(bound.compare(1, 0), Ordering::Less);
}

#[test]
fn can_compare_by_rank_and_crowding() {
    let limits = create_minimization_limits();
    // rank 0: members 0, 1, 3; rank 1: member 2
    let set = create_solution_set(&limits, &[&[1., 5.], &[5., 1.], &[3., 3.], &[2., 2.]]);

    let bound = ParetoRankAndCrowdingComparator.bind(&set);

    // lower rank wins regardless of crowding
    assert_eq!(bound.compare(3, 2), Ordering::Less);
    assert_eq!(bound.compare(2, 0), Ordering::Greater);

    // within the same rank, larger crowding distance wins: extremes beat the interior member
    assert_eq!(bound.compare(0, 3), Ordering::Less);
    assert_eq!(bound.compare(1, 3), Ordering::Less);
    assert_eq!(bound.compare(0, 1), Ordering::Equal);
}
