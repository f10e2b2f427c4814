//! Cross-module properties of the public API.

use std::collections::HashMap;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use underbar::{
    difference, every, filter, flatten, intersection, map, nested, once, reduce, reject, some,
    sort_by_property, throttle, uniq, zip2, ManualClock,
};

fn random_values(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

#[test]
fn test_map_after_filter_preserves_order() {
    for seed in 0..20 {
        let values = random_values(seed, 40);
        let positives = filter(&values, |n| *n > 0);
        let doubled = map(&positives, |n| n * 2);

        let expected: Vec<i32> = values.iter().filter(|n| **n > 0).map(|n| n * 2).collect();
        assert_eq!(doubled, expected);
    }
}

#[test]
fn test_filter_and_reject_partition() {
    for seed in 0..20 {
        let values = random_values(seed, 40);
        let even = |n: &i32| n % 2 == 0;

        let kept = filter(&values, even);
        let dropped = reject(&values, even);

        assert_eq!(kept.len() + dropped.len(), values.len());
        assert!(kept.iter().all(|n| even(n)));
        assert!(dropped.iter().all(|n| !even(n)));

        let mut rebuilt: Vec<i32> = kept.iter().chain(dropped.iter()).copied().collect();
        let mut original = values.clone();
        rebuilt.sort();
        original.sort();
        assert_eq!(rebuilt, original);
    }
}

#[test]
fn test_reduce_sum() {
    assert_eq!(reduce(&[1, 2, 3], |acc, x| acc + x, 0), 6);
}

#[test]
fn test_uniq_first_occurrence() {
    assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
}

#[test]
fn test_zip_letters_and_numbers() {
    assert_eq!(
        zip2(&['a', 'b', 'c'], &[1, 2]),
        vec![(Some('a'), Some(1)), (Some('b'), Some(2)), (Some('c'), None)]
    );
}

#[test]
fn test_flatten_nested() {
    assert_eq!(flatten(&nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_intersection_and_difference() {
    let b = [2, 3, 4];
    assert_eq!(intersection(&[&[1, 2, 3][..], &b[..]]), vec![2, 3]);
    assert_eq!(difference(&[1, 2, 3], &[&b[..]]), vec![1]);
}

#[test]
fn test_once_ignores_later_arguments() {
    let mut calls = 0;
    let mut first_seen = once(|s: &'static str| {
        calls += 1;
        s
    });

    let results: Vec<_> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|s| first_seen.call(s))
        .collect();
    drop(first_seen);

    assert_eq!(results, vec!["a"; 5]);
    assert_eq!(calls, 1);
}

#[test]
fn test_throttle_tight_loop() {
    let clock = ManualClock::new();
    let mut calls = 0;
    {
        let mut limited = throttle(
            |_: &()| {
                calls += 1;
            },
            Duration::from_millis(100),
            (),
            clock.clone(),
        );

        for _ in 0..10 {
            limited.call();
            clock.advance(Duration::from_millis(5));
        }

        clock.advance(Duration::from_millis(100));
        limited.call();
    }
    assert_eq!(calls, 2);
}

#[test]
fn test_sort_by_property_ascending_and_stable() {
    let rows: Vec<HashMap<&str, i32>> = [(3, 0), (1, 1), (2, 2), (1, 3)]
        .into_iter()
        .map(|(n, id)| HashMap::from([("n", n), ("id", id)]))
        .collect();

    let sorted = sort_by_property(&rows, "n").unwrap();
    let ids: Vec<i32> = sorted.iter().map(|row| row["id"]).collect();

    assert_eq!(ids, vec![1, 3, 2, 0]);
}

#[test]
fn test_vacuous_truth() {
    let empty: Vec<i32> = Vec::new();
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}
