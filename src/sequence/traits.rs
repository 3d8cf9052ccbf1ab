use std::pin::Pin;
use std::future::Future;

use crate::{BincodeConfiguration, RenderConfiguration};
use crate::sequence::{Sequence, Tuple};

/// ### -> `Length Trait`.
///
/// Synchronous length queries. Every sequence knows its length, so all of these are
/// O(1).
///
/// ### -> `Methods`
/// - `length() -> usize`: the element count.
/// - `is_empty() -> bool`: whether the length is zero.
/// - `length_eq(other) -> bool`: whether two sequences have the same length.
/// - `length_cmp(other) -> Option<Ordering>`: compares two lengths.
pub trait Length {
    fn length(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

/// ### -> `Construction<T> Trait`.
///
/// Builds sequences from nothing, from a single element, from a generating function
/// or from a slice.
///
/// ### -> `Methods`
/// - `empty() -> Self`: a valid sequence of length 0.
/// - `singleton(element) -> Self`: a sequence holding exactly `element`.
/// - `tabulate(f, n) -> Result<Self>`:
///     - element `i` is `f(i)` for `0 <= i < n`, evaluated in index order.
///     - `n` is signed so that a negative length is reported as an error instead of
///       being unrepresentable.
/// - `tabulate_concurrent(f, n) -> Result<Self>`:
///     - same contract as `tabulate`, but `f` is evaluated concurrently (one task per
///       index) and the results are assembled in index order.
///     - requires a running tokio runtime. `n == 0` spawns nothing.
/// - `from_slice(elements) -> Self`: a defensive copy of `elements`. Mutating the
///   slice afterwards does not affect the sequence.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let squares = Sequence::tabulate(|i| i * i, 4).unwrap();
/// assert_eq!(squares.to_slice(), vec![0, 1, 4, 9]);
///
/// assert!(Sequence::tabulate(|i| i, -1).is_err());
///
/// let mut source = vec!["a", "b"];
/// let copied = Sequence::from_slice(&source);
/// source[0] = "z";
/// assert_eq!(*copied.nth(0).unwrap(), "a");
///
/// assert_eq!(Sequence::singleton(7).length(), 1);
/// assert!(Sequence::<i32>::empty().is_empty());
/// ```
pub trait Construction<T>
where
    Self: Sized
{
    fn empty() -> Self;

    fn singleton(element: T) -> Self;

    fn tabulate<F>(f: F, n: isize) -> anyhow::Result<Self>
    where
        F: FnMut(usize) -> T;

    fn tabulate_concurrent<F>(f: F, n: isize) -> Pin<Box<dyn Future<Output = anyhow::Result<Self>> + Send + 'static>>
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
        T: Send + Sync + 'static;

    fn from_slice(elements: &[T]) -> Self
    where
        T: Clone;
}

/// ### -> `Access<T> Trait`.
///
/// Read-only element access. Neither method has side effects.
///
/// ### -> `Methods`
/// - `nth(n) -> Result<&T>`: the element at `n`. Fails with
///   [`Error::OutOfBounds`](crate::error::Error::OutOfBounds) when `n < 0` or
///   `n >= length`.
/// - `to_slice() -> Vec<T>`: a new, independently owned copy of the elements in order.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let sequence = Sequence::from_slice(&[10, 20, 30]);
/// assert_eq!(*sequence.nth(1).unwrap(), 20);
/// assert!(sequence.nth(-1).is_err());
/// assert!(sequence.nth(3).is_err());
///
/// let mut copy = sequence.to_slice();
/// copy[0] = 0;
/// assert_eq!(*sequence.nth(0).unwrap(), 10);
/// ```
pub trait Access<T> {
    fn nth(&self, n: isize) -> anyhow::Result<&T>;

    fn to_slice(&self) -> Vec<T>
    where
        T: Clone;
}

/// ### -> `Transform<T> Trait`.
///
/// Pure transformations. Each method allocates and returns a new sequence; the
/// receiver is never changed.
///
/// ### -> `Methods`
/// - `rev()`: elements in reverse index order.
/// - `append(other)`: the receiver's elements followed by `other`'s.
/// - `filter(f)`: the elements for which `f` holds, in original relative order.
/// - `map(f)`: element `i` is `f(s[i])`.
/// - `zip(other)`: `Tuple(s[i], t[i])` for `i < min(length(s), length(t))`. The tail of
///   the longer sequence is dropped without error.
/// - `zip_with(f, other)`: `f(s[i], t[i])` with the same truncation rule.
/// - `enumerate()`: `Tuple(i, s[i])` for every index.
/// - `filter_idx(f)`: like `filter`, but `f` also receives the element's index in the
///   receiver.
/// - `map_idx(f)`: like `map`, but `f` also receives the index.
///
/// Flattening is defined on `Sequence<Sequence<T>>` directly, see
/// [`Sequence::flatten`].
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let numbers = Sequence::from_slice(&[1, 2, 3]);
/// let letters = Sequence::from_slice(&["a", "b"]);
///
/// let zipped = numbers.zip(&letters);
/// assert_eq!(zipped.length(), 2);
/// assert_eq!(*zipped.nth(1).unwrap(), Tuple::new(2, "b"));
///
/// let doubled_evens = numbers.filter(|n| n % 2 == 0).map(|n| n * 2);
/// assert_eq!(doubled_evens.to_slice(), vec![4]);
///
/// assert_eq!(numbers.rev().append(&numbers).to_slice(), vec![3, 2, 1, 1, 2, 3]);
/// ```
pub trait Transform<T> {
    fn rev(&self) -> Sequence<T>
    where
        T: Clone;

    fn append(&self, other: &Sequence<T>) -> Sequence<T>
    where
        T: Clone;

    fn filter<F>(&self, f: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U;

    fn zip<U>(&self, other: &Sequence<U>) -> Sequence<Tuple<T, U>>
    where
        T: Clone,
        U: Clone;

    fn zip_with<U, V, F>(&self, f: F, other: &Sequence<U>) -> Sequence<V>
    where
        F: FnMut(&T, &U) -> V;

    fn enumerate(&self) -> Sequence<Tuple<usize, T>>
    where
        T: Clone;

    fn filter_idx<F>(&self, f: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool;

    fn map_idx<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(usize, &T) -> U;
}

/// ### -> `Revision<T> Trait`.
///
/// Index based "modifications" that return a new value. The receiver is left
/// untouched whether the call succeeds or fails, and on failure no sequence is
/// returned at all.
///
/// ### -> `Methods`
/// - `update(index, element) -> Result<Self>`:
///     - a copy of the receiver with `index` holding `element`.
///     - fails with `OutOfBounds` when `index` is not a valid index.
/// - `inject(updates) -> Result<Self>`:
///     - `updates` holds `Tuple(index, value)` pairs applied in order, so a later
///       entry for the same index wins.
///     - every index is validated before anything is written; one invalid index fails
///       the whole call with `OutOfBounds`.
/// - `subseq(start, stop) -> Result<Self>`:
///     - the half-open range `[start, stop)`.
///     - fails with `InvalidRange` when `start < 0`, `stop > length` or `start > stop`.
///     - `start == stop` yields an empty sequence.
/// - `split(index) -> Result<(Self, Self)>`:
///     - `(subseq(0, index), subseq(index, length))`.
///     - fails with `OutOfBounds` when `index` is outside `0..=length`.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let sequence = Sequence::from_slice(&['a', 'b', 'c', 'd']);
///
/// let updated = sequence.update(1, 'x').unwrap();
/// assert_eq!(updated.to_slice(), vec!['a', 'x', 'c', 'd']);
/// assert_eq!(*sequence.nth(1).unwrap(), 'b');
///
/// let updates = Sequence::from_slice(&[Tuple::new(0, 'y'), Tuple::new(0, 'z')]);
/// assert_eq!(sequence.inject(&updates).unwrap().to_slice(), vec!['z', 'b', 'c', 'd']);
///
/// assert_eq!(sequence.subseq(1, 3).unwrap().to_slice(), vec!['b', 'c']);
/// assert!(sequence.subseq(3, 1).is_err());
///
/// let (left, right) = sequence.split(1).unwrap();
/// assert_eq!(left.length() + right.length(), 4);
/// ```
pub trait Revision<T>
where
    Self: Sized
{
    fn update(&self, index: isize, element: T) -> anyhow::Result<Self>
    where
        T: Clone;

    fn inject(&self, updates: &Sequence<Tuple<usize, T>>) -> anyhow::Result<Self>
    where
        T: Clone;

    fn subseq(&self, start: isize, stop: isize) -> anyhow::Result<Self>
    where
        T: Clone;

    fn split(&self, index: isize) -> anyhow::Result<(Self, Self)>
    where
        T: Clone;
}

/// ### -> `Equality<T> Trait`.
///
/// Element-wise comparison with a caller-supplied predicate.
///
/// `equal(other, f)` holds when both sequences have the same length and `f(s[i], t[i])`
/// holds for every index. It stops at the first mismatching pair and never calls `f`
/// when the lengths differ. The two element types may differ.
///
/// For `T: PartialEq`, `Sequence<T>` also implements `PartialEq` with `==` as the
/// predicate.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let numbers = Sequence::from_slice(&[1, 2, 3]);
/// let strings = Sequence::from_slice(&["1", "2", "3"]);
///
/// assert!(numbers.equal(&strings, |n, s| n.to_string() == *s));
/// assert!(!numbers.equal(&strings.subseq(0, 2).unwrap(), |_, _| true));
/// ```
pub trait Equality<T> {
    fn equal<U, F>(&self, other: &Sequence<U>, f: F) -> bool
    where
        F: FnMut(&T, &U) -> bool;
}

/// ### -> `Render<T> Trait`.
///
/// Order-preserving concurrent string rendering.
///
/// Every element is converted by `f` in its own task; results land in a pre-sized,
/// index-addressed buffer and are joined strictly in index order after all tasks have
/// finished. The output is therefore identical on every run regardless of which
/// conversion completes first.
///
/// Both methods return `'static` futures that must be polled inside a tokio runtime.
/// For a blocking call, see [`Renderer`](crate::render::Renderer).
///
/// ### -> `Methods`
/// - `render(f) -> String`: joins with `", "`. An empty sequence renders as `""`
///   without spawning any task.
/// - `render_with(f, configuration) -> String`: joins with `configuration.separator`.
///
/// A panic inside `f` is not caught: it is re-raised on the awaiting task once every
/// conversion has finished.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// async fn example() -> anyhow::Result<()> {
///     let sequence: Sequence<i32> = (0..5).collect();
///     assert_eq!(sequence.render(|n: &i32| n.to_string()).await, "0, 1, 2, 3, 4");
///
///     let configuration = RenderConfiguration::default().with_separator("/");
///     assert_eq!(sequence.render_with(|n: &i32| n.to_string(), &configuration).await, "0/1/2/3/4");
///
///     Ok(())
/// }
///
/// tokio::runtime::Runtime::new().unwrap().block_on(example()).unwrap();
/// ```
pub trait Render<T>
where
    T: Send + Sync + 'static
{
    fn render<F>(&self, f: F) -> Pin<Box<dyn Future<Output = String> + Send + 'static>>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.render_with(f, &RenderConfiguration::default())
    }

    fn render_with<F>(&self, f: F, configuration: &RenderConfiguration) -> Pin<Box<dyn Future<Output = String> + Send + 'static>>
    where
        F: Fn(&T) -> String + Send + Sync + 'static;
}

/// ### -> `Bincode<T> Trait`.
///
/// Encodes a sequence to bytes and back through its serde representation (a length
/// followed by the elements). [`BincodeConfiguration`] selects the integer encoding.
/// Decoding fails on malformed input and on trailing bytes.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// let sequence = Sequence::from_slice(&[Tuple::new(0, "zero".to_string())]);
/// let bytes = sequence.bincode(&BincodeConfiguration::Standard).unwrap();
/// let decoded = Sequence::<Tuple<i32, String>>::from_bincode(&bytes, &BincodeConfiguration::Standard).unwrap();
/// assert_eq!(decoded, sequence);
/// ```
pub trait Bincode<T>
where
    Self: Sized
{
    fn bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize;

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned;
}
