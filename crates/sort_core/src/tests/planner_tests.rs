use super::*;
use crate::generator::RandomSetGenerator;

fn step(i: usize, j: usize) -> SwapStep {
    SwapStep { i, j }
}

fn sorted_by_plan(values: &[u32], direction: SortDirection) -> Vec<u32> {
    let mut copy = values.to_vec();
    apply_plan(&mut copy, &plan(values, direction));
    copy
}

#[test]
fn ascending_plan_matches_lomuto_snapshot() {
    let values = [5, 3, 8, 1, 9, 2];
    let steps = plan(&values, SortDirection::Ascending);
    assert_eq!(steps, vec![step(0, 3), step(1, 5), step(2, 5), step(4, 5)]);
    assert_eq!(sorted_by_plan(&values, SortDirection::Ascending), vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn descending_plan_matches_lomuto_snapshot() {
    let values = [5, 3, 8, 1, 9, 2];
    let steps = plan(&values, SortDirection::Descending);
    assert_eq!(
        steps,
        vec![step(3, 4), step(4, 5), step(0, 3), step(1, 2), step(2, 3)]
    );
    assert_eq!(sorted_by_plan(&values, SortDirection::Descending), vec![9, 8, 5, 3, 2, 1]);
}

#[test]
fn plan_never_mutates_input() {
    let values = vec![4, 3, 2, 1];
    let steps = plan(&values, SortDirection::Ascending);
    assert_eq!(values, vec![4, 3, 2, 1]);
    assert_eq!(steps, vec![step(0, 3), step(1, 2)]);
}

#[test]
fn trivial_inputs_plan_no_steps() {
    assert!(plan(&[], SortDirection::Ascending).is_empty());
    assert!(plan(&[17], SortDirection::Descending).is_empty());
    assert!(plan(&[1, 2, 3, 4], SortDirection::Ascending).is_empty());
    assert!(plan(&[7, 7, 7], SortDirection::Descending).is_empty());
}

#[test]
fn plans_never_contain_self_swaps_and_stay_in_bounds() {
    let mut generator = RandomSetGenerator::seeded(11);
    for count in 1..40 {
        let values = generator.generate(count);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            for s in plan(&values, direction) {
                assert_ne!(s.i, s.j);
                assert!(s.i < count && s.j < count);
            }
        }
    }
}

#[test]
fn every_plan_sorts_its_input() {
    let mut generator = RandomSetGenerator::seeded(5);
    for count in [1, 2, 3, 10, 31, 100, 500] {
        let values = generator.generate(count);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sorted_by_plan(&values, direction);
            assert!(direction.is_sorted(&sorted), "{direction:?} {count}");

            let mut expected = values.clone();
            expected.sort_by(|a, b| direction.compare(*a, *b));
            assert_eq!(sorted, expected);
        }
    }
}

#[test]
fn plan_is_deterministic() {
    let values = RandomSetGenerator::seeded(9).generate(200);
    assert_eq!(
        plan(&values, SortDirection::Descending),
        plan(&values, SortDirection::Descending)
    );
}

#[test]
fn alternating_directions_end_ascending() {
    let original = RandomSetGenerator::seeded(21).generate(64);
    let mut live = original.clone();
    for direction in [
        SortDirection::Ascending,
        SortDirection::Descending,
        SortDirection::Ascending,
    ] {
        let steps = plan(&live, direction);
        apply_plan(&mut live, &steps);
    }

    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(live, expected);
}
