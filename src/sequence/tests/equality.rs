use std::collections::HashSet;

use crate::sequence::prelude::*;

#[test]
fn equal_element_wise() {
    let numbers = Sequence::from_slice(&[1, 2, 3]);
    let same = Sequence::from_slice(&[1, 2, 3]);
    let different = Sequence::from_slice(&[1, 2, 4]);

    assert!(numbers.equal(&same, |a, b| a == b));
    assert!(!numbers.equal(&different, |a, b| a == b));
    assert!(Sequence::<i32>::empty().equal(&Sequence::<String>::empty(), |_, _| false));
}

#[test]
fn equal_across_element_types() {
    let numbers = Sequence::from_slice(&[1, 2, 3]);
    let words = Sequence::from_slice(&["1", "2", "3"]);

    assert!(numbers.equal(&words, |n, w| n.to_string() == *w));
}

#[test]
fn equal_skips_predicate_on_length_mismatch() {
    let short = Sequence::from_slice(&[1, 2]);
    let long = Sequence::from_slice(&[1, 2, 3]);

    let mut calls = 0;
    assert!(!short.equal(&long, |_, _| { calls += 1; true }));
    assert_eq!(calls, 0);
}

#[test]
fn equal_short_circuits() {
    let left = Sequence::from_slice(&[1, 9, 3, 4]);
    let right = Sequence::from_slice(&[1, 2, 3, 4]);

    let mut calls = 0;
    assert!(!left.equal(&right, |a, b| { calls += 1; a == b }));
    assert_eq!(calls, 2);
}

#[test]
fn partial_eq_and_hash() {
    let a = Sequence::from_slice(&["x", "y"]);
    let b: Sequence<&str> = vec!["x", "y"].into();
    let c = a.rev();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}
