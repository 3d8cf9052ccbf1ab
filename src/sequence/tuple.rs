use serde::{Deserialize, Serialize};

/// ### -> `Tuple<A, B>` - an immutable ordered pair.
///
/// The element type produced by pairing operations (`zip`, `enumerate`) and consumed
/// by `inject`. Fields are read through `a()`/`b()` and never change after
/// construction.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let tuple = Tuple::new(1, "one");
/// assert_eq!(*tuple.a(), 1);
/// assert_eq!(*tuple.b(), "one");
///
/// let (a, b) = tuple.into_parts();
/// assert_eq!((a, b), (1, "one"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple<A, B> {
    a: A,
    b: B,
}

impl <A, B> Tuple<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &A {
        &self.a
    }

    pub fn b(&self) -> &B {
        &self.b
    }

    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl <A, B> From<(A, B)> for Tuple<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}

impl <A, B> From<Tuple<A, B>> for (A, B) {
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_parts()
    }
}
