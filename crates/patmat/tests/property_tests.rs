//! Property-based tests for the matching engine.
//!
//! These use proptest to generate values and patterns and check:
//! 1. Wildcard totality: every value matches `_` and nothing is captured
//! 2. Rest resolution agrees with a brute-force search over every split
//! 3. Repeated captures match exactly when the captured values are equal
//! 4. Negation leaves the binding table as it found it
//! 5. Batch matching agrees with matching one value at a time

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use patmat::{is_matchable, match_pattern, rest, Bindings, Element, Id, Pattern};
use patmat_value::Value;
use proptest::prelude::*;

// -- Value Generation Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-8i64..8).prop_map(Value::int),
        any::<bool>().prop_map(Value::Bool),
        prop::char::range('a', 'e').prop_map(Value::Char),
        "[a-c]{0,3}".prop_map(Value::string),
        Just(Value::None),
        Just(Value::Void),
    ]
}

/// Generate a value (recursive with depth limit).
fn value_strategy(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        scalar_strategy().boxed()
    } else {
        prop_oneof![
            scalar_strategy(),
            prop::collection::vec(value_strategy(depth - 1), 0..4).prop_map(Value::list),
            prop::collection::vec(value_strategy(depth - 1), 0..4).prop_map(Value::tuple),
            value_strategy(depth - 1).prop_map(Value::some),
            value_strategy(depth - 1).prop_map(Value::ok),
        ]
        .boxed()
    }
}

fn small_ints() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..6, 0..8)
}

/// Brute-force reference for `[head.., ..(n <= limit), tail..]`: try every
/// split, no pruning.
fn reference_rest_match(items: &[i64], head: &[i64], limit: i64, tail: &[i64]) -> bool {
    if items.len() < head.len() + tail.len() {
        return false;
    }
    (0..=items.len() - head.len() - tail.len()).any(|k| {
        let (front, after) = items.split_at(head.len());
        let (middle, back) = after.split_at(k);
        front == head && middle.iter().all(|&n| n <= limit) && back == tail
    })
}

fn rest_pattern(head: &[i64], limit: i64, tail: &[i64]) -> Pattern {
    let mut elements: Vec<Element> = head.iter().map(|&n| Pattern::lit(n).into()).collect();
    elements.push(rest(Pattern::meet(move |v| {
        v.as_int().is_some_and(|n| n <= limit)
    })));
    elements.extend(tail.iter().map(|&n| Element::from(Pattern::lit(n))));
    Pattern::ds(elements).unwrap()
}

fn int_list(items: &[i64]) -> Value {
    Value::list(items.iter().copied().map(Value::int).collect())
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_wildcard_matches_everything(value in value_strategy(3)) {
        let mut bindings = Bindings::new();
        prop_assert!(match_pattern(&value, &Pattern::wildcard(), &mut bindings));
        prop_assert!(bindings.is_empty());
    }

    #[test]
    fn prop_literal_matches_itself(value in value_strategy(3)) {
        let pattern = Pattern::lit(value.clone());
        prop_assert!(pattern.is_match(&value));
        prop_assert!(is_matchable(&value.ty(), &pattern));
    }

    #[test]
    fn prop_rest_agrees_with_brute_force(
        items in small_ints(),
        head in prop::collection::vec(0i64..6, 0..3),
        tail in prop::collection::vec(0i64..6, 0..3),
        limit in 0i64..6,
    ) {
        let pattern = rest_pattern(&head, limit, &tail);
        prop_assert_eq!(
            pattern.is_match(&int_list(&items)),
            reference_rest_match(&items, &head, limit, &tail)
        );
    }

    #[test]
    fn prop_repeated_capture_requires_equality(
        a in value_strategy(2),
        b in value_strategy(2),
    ) {
        let x = Id::new("x");
        let pattern = Pattern::tuple([Pattern::from(&x), Pattern::from(&x)]);
        let pair = Value::tuple(vec![a.clone(), b.clone()]);
        prop_assert_eq!(pattern.is_match(&pair), a == b);
    }

    #[test]
    fn prop_not_leaves_no_bindings(value in value_strategy(2)) {
        let x = Id::new("x");
        let y = Id::new("y");
        let inner = Pattern::or([
            Pattern::tuple([Pattern::from(&x), Pattern::wildcard()]),
            Pattern::and([Pattern::from(&y), Pattern::lit(0)]),
        ]);
        let mut bindings = Bindings::new();
        let _ = match_pattern(&value, &Pattern::not(inner), &mut bindings);
        prop_assert!(bindings.is_empty());
    }

    #[test]
    fn prop_batch_agrees_with_sequential(
        values in prop::collection::vec(value_strategy(2), 0..32),
    ) {
        let pattern = Pattern::or([
            Pattern::some(Pattern::wildcard()),
            Pattern::ds([rest(Pattern::wildcard()), Pattern::lit(true).into()]).unwrap(),
        ]);
        let expected: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| pattern.is_match(v))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(patmat::par_filter(&pattern, &values), expected);
    }
}
