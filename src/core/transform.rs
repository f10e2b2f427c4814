//! # Sequence Transforms
//!
//! `map`, `filter`, `reject`, `uniq`, `pluck`, `invoke`.
//!
//! Everything here is a thin layer over [`Collection::each`]. Inputs are
//! never mutated; outputs are fresh vectors in traversal order.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use super::collection::Collection;
use super::error::{Error, Result};

/// Apply `iterator` to every element, collecting the results
pub fn map<C, U, F>(collection: &C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(collection.size());
    collection.each(|value, _, _| mapped.push(iterator(value)));
    mapped
}

/// Elements for which `predicate` holds
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    collection.each(|value, _, _| {
        if predicate(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Elements for which `predicate` fails
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Drop later duplicates, keeping first-occurrence order
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Hash + Eq,
{
    let mut seen = HashSet::new();
    filter(collection, |value| seen.insert(value.clone()))
}

/// Like [`uniq`], but two values are duplicates when they render the same
///
/// Distinct values with identical `Display` output collapse into the first
/// one seen. Use [`uniq`] unless that coercion is what you want.
pub fn uniq_by_display<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Display,
{
    let mut seen = HashSet::new();
    filter(collection, |value| seen.insert(value.to_string()))
}

// ============================================================================
// PROPERTY ACCESS
// ============================================================================

/// A value with named properties
pub trait Record {
    type Value;

    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<'k, V, S: BuildHasher> Record for HashMap<&'k str, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<'k, V> Record for BTreeMap<&'k str, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// `element[name]` for every element; `None` where the property is missing
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    map(collection, |element| element.property(name).cloned())
}

// ============================================================================
// METHOD DISPATCH
// ============================================================================

/// Zero-argument methods callable by name
pub trait Methods {
    type Output;

    /// `None` when the element has no method called `name`
    fn call_method(&self, name: &str) -> Option<Self::Output>;
}

/// Call the method `name` on every element
pub fn invoke<C>(collection: &C, name: &str) -> Result<Vec<<C::Item as Methods>::Output>>
where
    C: Collection + ?Sized,
    C::Item: Methods,
{
    map(collection, |element| {
        element.call_method(name).ok_or_else(|| Error::UnknownMethod {
            name: name.to_string(),
        })
    })
    .into_iter()
    .collect()
}

/// Call `method` with each element as its receiver
pub fn invoke_with<C, R, F>(collection: &C, method: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    map(collection, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Word(&'static str);

    impl Methods for Word {
        type Output = String;

        fn call_method(&self, name: &str) -> Option<String> {
            match name {
                "upper" => Some(self.0.to_uppercase()),
                "reverse" => Some(self.0.chars().rev().collect()),
                _ => None,
            }
        }
    }

    fn person(name: &str, age: u32) -> HashMap<String, String> {
        let mut record = HashMap::new();
        record.insert("name".to_string(), name.to_string());
        record.insert("age".to_string(), age.to_string());
        record
    }

    #[test]
    fn test_map() {
        let doubled = map(&[1, 2, 3], |n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_map_does_not_mutate_input() {
        let input = vec![1, 2, 3];
        let _ = map(&input, |n| n + 1);
        assert_eq!(input, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_and_reject() {
        let values = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(filter(&values, |n| n % 2 == 0), vec![2, 4, 6]);
        assert_eq!(reject(&values, |n| n % 2 == 0), vec![1, 3, 5]);
    }

    #[test]
    fn test_uniq_first_occurrence() {
        assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn test_uniq_keeps_distinct_renderings_apart() {
        let values = vec!["1".to_string(), "01".to_string(), "1".to_string()];
        assert_eq!(uniq(&values), vec!["1".to_string(), "01".to_string()]);
    }

    #[test]
    fn test_uniq_by_display_collapses_equal_renderings() {
        #[derive(Debug, Clone, PartialEq)]
        struct Opaque(u32);

        impl Display for Opaque {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[object]")
            }
        }

        let values = vec![Opaque(1), Opaque(2), Opaque(3)];
        assert_eq!(uniq_by_display(&values), vec![Opaque(1)]);
        assert_eq!(uniq_by_display(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn test_pluck() {
        let people = vec![person("moe", 40), person("larry", 50)];
        let names = pluck(&people, "name");
        assert_eq!(
            names,
            vec![Some("moe".to_string()), Some("larry".to_string())]
        );
    }

    #[test]
    fn test_pluck_missing_property() {
        let people = vec![person("curly", 60)];
        assert_eq!(pluck(&people, "email"), vec![None]);
    }

    #[test]
    fn test_invoke_by_name() {
        let words = vec![Word("dog"), Word("cat")];
        let upper = invoke(&words, "upper").unwrap();
        assert_eq!(upper, vec!["DOG", "CAT"]);
    }

    #[test]
    fn test_invoke_unknown_method() {
        let words = vec![Word("dog")];
        let result = invoke(&words, "bark");
        assert_eq!(
            result,
            Err(Error::UnknownMethod {
                name: "bark".to_string()
            })
        );
    }

    #[test]
    fn test_invoke_with_receiver() {
        let words = vec![Word("dog"), Word("cat")];
        let suffix = "!";
        let shouted = invoke_with(&words, |w| format!("{}{}", w.0, suffix));
        assert_eq!(shouted, vec!["dog!", "cat!"]);
    }
}
