//! Property-based tests for history navigation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use rewind::{History, HistoryBuilder};

#[derive(Clone, Debug)]
enum Step {
    Back,
    Forward,
    To(i32),
    Evolve,
}

prop_compose! {
    fn arbitrary_step()(variant in 0..4u8, value in any::<i32>()) -> Step {
        match variant {
            0 => Step::Back,
            1 => Step::Forward,
            2 => Step::To(value),
            _ => Step::Evolve,
        }
    }
}

fn apply(history: &History<i32>, step: &Step) -> History<i32> {
    match step {
        Step::Back => history.back(),
        Step::Forward => history.forward(),
        Step::To(value) => history.to(*value),
        Step::Evolve => history.evolve(|n| n.wrapping_add(1)),
    }
}

prop_compose! {
    fn arbitrary_history()(
        seed in any::<i32>(),
        steps in prop::collection::vec(arbitrary_step(), 0..30)
    ) -> History<i32> {
        steps
            .iter()
            .fold(History::new(seed), |history, step| apply(&history, step))
    }
}

proptest! {
    #[test]
    fn new_holds_seed_value(value in any::<i32>()) {
        prop_assert_eq!(*History::new(value).current(), value);
    }

    #[test]
    fn new_history_is_fixed_point_of_navigation(value in any::<i32>()) {
        let history = History::new(value);
        prop_assert_eq!(history.back(), history.clone());
        prop_assert_eq!(history.forward(), history);
    }

    #[test]
    fn to_sets_current(history in arbitrary_history(), value in any::<i32>()) {
        prop_assert_eq!(*history.to(value).current(), value);
    }

    #[test]
    fn back_after_to_restores_present_and_past(
        history in arbitrary_history(),
        value in any::<i32>()
    ) {
        let restored = history.to(value).back();

        prop_assert_eq!(restored.current(), history.current());
        prop_assert!(restored.past().eq(history.past()));
        prop_assert_eq!(restored.future().collect::<Vec<_>>(), vec![&value]);
    }

    #[test]
    fn to_discards_future(history in arbitrary_history(), value in any::<i32>()) {
        let moved = history.to(value);

        prop_assert!(!moved.can_forward());
        prop_assert_eq!(moved.forward(), moved.clone());
        prop_assert_eq!(moved.past_len(), history.past_len() + 1);
    }

    #[test]
    fn forward_undoes_back(history in arbitrary_history()) {
        prop_assume!(history.can_back());
        prop_assert_eq!(history.back().forward(), history);
    }

    #[test]
    fn back_undoes_forward(history in arbitrary_history()) {
        prop_assume!(history.can_forward());
        prop_assert_eq!(history.forward().back(), history);
    }

    #[test]
    fn navigation_preserves_total_size(history in arbitrary_history()) {
        let total = history.past_len() + history.future_len();

        let back = history.back();
        let forward = history.forward();

        prop_assert_eq!(back.past_len() + back.future_len(), total);
        prop_assert_eq!(forward.past_len() + forward.future_len(), total);
    }

    #[test]
    fn evolve_is_to_of_transformed_current(history in arbitrary_history()) {
        let evolved = history.evolve(|n| n.wrapping_mul(3));
        let expected = history.to(history.current().wrapping_mul(3));
        prop_assert_eq!(evolved, expected);
    }

    #[test]
    fn repeated_back_at_boundary_is_stable(
        values in prop::collection::vec(any::<i32>(), 1..10),
        extra in 1..5usize
    ) {
        let history = History::from_list(values.clone()).unwrap();
        let exhausted = (0..values.len()).fold(history, |h, _| h.back());
        prop_assert!(!exhausted.can_back());

        let again = (0..extra).fold(exhausted.clone(), |h, _| h.back());
        prop_assert_eq!(again, exhausted);
    }

    #[test]
    fn from_list_orders_past_as_given(values in prop::collection::vec(any::<i32>(), 1..10)) {
        let history = History::from_list(values.clone()).unwrap();

        prop_assert_eq!(*history.current(), values[0]);
        prop_assert_eq!(history.past().copied().collect::<Vec<_>>(), values[1..].to_vec());
        prop_assert!(!history.can_forward());
        if values.len() > 1 {
            prop_assert_eq!(*history.back().current(), values[1]);
        }
    }

    #[test]
    fn map_applies_to_current_and_preserves_lengths(history in arbitrary_history()) {
        let mapped = history.map(|n| i64::from(*n) * 2);

        prop_assert_eq!(*mapped.current(), i64::from(*history.current()) * 2);
        prop_assert_eq!(mapped.past_len(), history.past_len());
        prop_assert_eq!(mapped.future_len(), history.future_len());
    }

    #[test]
    fn map_commutes_with_navigation(history in arbitrary_history()) {
        let double = |n: &i32| n.wrapping_mul(2);
        prop_assert_eq!(history.back().map(double), history.map(double).back());
        prop_assert_eq!(history.forward().map(double), history.map(double).forward());
    }

    #[test]
    fn parts_round_trip_through_builder(history in arbitrary_history()) {
        let (past, current, future) = history.clone().into_parts();
        let rebuilt = HistoryBuilder::new()
            .past(past)
            .current(current)
            .future(future)
            .build()
            .unwrap();

        prop_assert_eq!(rebuilt, history);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn history_roundtrip_serialization(history in arbitrary_history()) {
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History<i32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(deserialized, history);
    }
}

#[test]
fn from_list_of_empty_is_none() {
    assert!(History::<i32>::from_list(Vec::new()).is_none());
}
