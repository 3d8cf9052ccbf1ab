use std::sync::Arc;
use std::future::Future;
use std::pin::Pin;

pub mod prelude;
pub mod traits;
mod tuple;

pub use tuple::Tuple;
use traits::Length;
use crate::error::{self, Error};

/// ### -> `Sequence<T>` - an immutable, finite, ordered, value-like collection.
///
/// `Sequence<T>` stores elements of a single type `T`, indexed from 0, and never
/// changes after construction. Every operation that "modifies" a sequence returns a
/// new one; the receiver stays valid and unchanged.
///
/// ### -> `Immutability Explained`
///
/// The elements live in an `Arc<[T]>` that nothing can write to once the sequence is
/// built:
///
/// - **Cloning** a `Sequence<T>` is O(1) and shares the storage. Since the storage is
///   never mutated, a clone is observationally identical to a deep copy.
/// - **Derived sequences** (`rev`, `map`, `update`, `subseq`, ...) always allocate
///   fresh storage, so no derived sequence aliases the storage of its input in a way
///   that could be observed.
/// - **Copies out** (`to_slice`) are independent `Vec<T>`s; mutating them never
///   affects the sequence.
///
/// ### -> `Traits Implemented`
///
/// - **`Construction<T>`**: `empty`, `singleton`, `tabulate`, `tabulate_concurrent`, `from_slice`.
/// - **`Access<T>`**: `nth`, `to_slice`.
/// - **`Length`**: `length`, `is_empty`, `length_eq`, `length_cmp`.
/// - **`Transform<T>`**: `rev`, `append`, `filter`, `map`, `zip`, `zip_with`, `enumerate`,
///   `filter_idx`, `map_idx`.
/// - **`Revision<T>`**: `update`, `inject`, `subseq`, `split`.
/// - **`Equality<T>`**: `equal` with a caller-supplied predicate.
/// - **`Render<T>`**: order-preserving concurrent rendering to a string.
/// - **`Bincode<T>`**: encoding to and from bytes.
/// - Standard traits: `Clone`, `Debug`, `Default`, `PartialEq`/`Eq`/`Hash` (when `T`
///   has them), `Index<usize>`, `FromIterator<T>`, `From<Vec<T>>`, `From<&[T]>`,
///   `IntoIterator for &Sequence<T>`, `Serialize`/`Deserialize`.
///
/// ### -> `Concurrency Model`
///
/// - A sequence is `Send + Sync` whenever `T` is, and concurrent readers need no
///   synchronization because nothing is ever written after construction.
/// - Only `render`, `render_with` and `tabulate_concurrent` use worker threads. They fan
///   out one task per element, collect results in an index-addressed buffer and wait
///   for all tasks before assembling the result in index order.
/// - Every other operation is synchronous, single-threaded and non-blocking.
///
/// ### -> `Error Handling`
///
/// - **Caller Errors** (index or range outside the sequence, negative length): return
///   `Result::Err` carrying a [`crate::error::Error`]. Nothing is clamped.
/// - **Invariant Violations** (e.g. a fan-out slot written twice): panic immediately,
///   as these indicate a bug rather than a recoverable condition.
/// - Panics inside caller-supplied closures are neither caught nor transformed.
///
/// ### -> `Usage Example`
///
/// ```
/// use sequin::prelude::*;
///
/// fn example() -> anyhow::Result<()> {
///     let sequence = Sequence::from_slice(&[3, 1, 4, 1, 5]);
///     assert_eq!(sequence.length(), 5);
///     assert_eq!(*sequence.nth(2)?, 4);
///
///     let evens = sequence.filter_idx(|index, _| index % 2 == 0);
///     assert_eq!(evens.to_slice(), vec![3, 4, 5]);
///
///     let updated = sequence.update(0, 9)?;
///     assert_eq!(updated.to_slice(), vec![9, 1, 4, 1, 5]);
///     assert_eq!(sequence.to_slice(), vec![3, 1, 4, 1, 5]);
///
///     let nested = Sequence::from_slice(&[sequence.subseq(0, 2)?, Sequence::singleton(7)]);
///     assert_eq!(nested.flatten().to_slice(), vec![3, 1, 7]);
///
///     let renderer = Renderer::new(RenderConfiguration::default())?;
///     assert_eq!(renderer.render(&sequence, |n: &i32| n.to_string()), "3, 1, 4, 1, 5");
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Sequence<T> {
    elements: Arc<[T]>,
}

impl <T> Sequence<T> {
    fn from_vec(vector: Vec<T>) -> Self {
        Self { elements: Arc::from(vector) }
    }

    /// Borrows the elements as a slice, in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Checks `index` against `0..length` and converts it.
    fn position(&self, operation: &'static str, index: isize) -> anyhow::Result<usize> {
        match usize::try_from(index) {
            Ok(position) if position < self.elements.len() => Ok(position),
            _ => Err(Error::out_of_bounds(operation, index, self.elements.len())),
        }
    }

    /// Checks `start..stop` against `0..=length` and converts it.
    fn range(&self, operation: &'static str, start: isize, stop: isize) -> anyhow::Result<std::ops::Range<usize>> {
        let length = self.elements.len();
        match (usize::try_from(start), usize::try_from(stop)) {
            (Ok(from), Ok(to)) if from <= to && to <= length => Ok(from..to),
            _ => Err(Error::invalid_range(operation, start, stop, length)),
        }
    }
}

impl <T> Sequence<Sequence<T>>
where
    T: Clone
{
    /// ### -> `flatten`
    ///
    /// Concatenates the inner sequences, outer order first and inner order second.
    ///
    /// ```
    /// use sequin::prelude::*;
    ///
    /// let nested = Sequence::from_slice(&[
    ///     Sequence::from_slice(&[1, 2]),
    ///     Sequence::empty(),
    ///     Sequence::from_slice(&[3]),
    /// ]);
    /// assert_eq!(nested.flatten().to_slice(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(&self) -> Sequence<T> {
        let total = self.elements.iter().map(|inner| inner.length()).sum();
        let mut flattened = Vec::with_capacity(total);
        for inner in self.elements.iter() {
            flattened.extend_from_slice(&inner.elements);
        }
        Sequence::from_vec(flattened)
    }
}

impl <T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self { elements: Arc::clone(&self.elements) }
    }
}

impl <T> Default for Sequence<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl <T: std::fmt::Debug> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl <T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        traits::Equality::equal(self, other, |a, b| a == b)
    }
}

impl <T: Eq> Eq for Sequence<T> {}

impl <T: std::hash::Hash> std::hash::Hash for Sequence<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl <T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl <T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl <T> From<Vec<T>> for Sequence<T> {
    fn from(vector: Vec<T>) -> Self {
        Self::from_vec(vector)
    }
}

impl <T: Clone> From<&[T]> for Sequence<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }
}

impl <'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl <T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements.iter())
    }
}

impl <'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

impl <T> traits::Length for Sequence<T> {
    #[inline(always)]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl <T> traits::Construction<T> for Sequence<T> {
    fn empty() -> Self {
        Self::default()
    }

    fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    fn tabulate<F>(f: F, n: isize) -> anyhow::Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        let count = usize::try_from(n).map_err(|_| Error::negative_length("tabulate", n))?;
        Ok((0..count).map(f).collect())
    }

    fn tabulate_concurrent<F>(f: F, n: isize) -> Pin<Box<dyn Future<Output = anyhow::Result<Self>> + Send + 'static>>
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        Box::pin(async move {
            let count = usize::try_from(n).map_err(|_| Error::negative_length("tabulate_concurrent", n))?;
            let elements = crate::render::fan_out(count, f).await;
            Ok(Self::from_vec(elements))
        })
    }

    fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(elements)
    }
}

impl <T> traits::Access<T> for Sequence<T> {
    fn nth(&self, n: isize) -> anyhow::Result<&T> {
        let position = self.position("nth", n)?;
        Ok(&self.elements[position])
    }

    fn to_slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.to_vec()
    }
}

impl <T> traits::Transform<T> for Sequence<T> {
    fn rev(&self) -> Sequence<T>
    where
        T: Clone,
    {
        self.elements.iter().rev().cloned().collect()
    }

    fn append(&self, other: &Sequence<T>) -> Sequence<T>
    where
        T: Clone,
    {
        let mut appended = Vec::with_capacity(self.length() + other.length());
        appended.extend_from_slice(&self.elements);
        appended.extend_from_slice(&other.elements);
        Self::from_vec(appended)
    }

    fn filter<F>(&self, mut f: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.elements.iter().filter(|element| f(*element)).cloned().collect()
    }

    fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.elements.iter().map(f).collect()
    }

    fn zip<U>(&self, other: &Sequence<U>) -> Sequence<Tuple<T, U>>
    where
        T: Clone,
        U: Clone,
    {
        self.elements.iter()
            .zip(other.elements.iter())
            .map(|(a, b)| Tuple::new(a.clone(), b.clone()))
            .collect()
    }

    fn zip_with<U, V, F>(&self, mut f: F, other: &Sequence<U>) -> Sequence<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.elements.iter()
            .zip(other.elements.iter())
            .map(|(a, b)| f(a, b))
            .collect()
    }

    fn enumerate(&self) -> Sequence<Tuple<usize, T>>
    where
        T: Clone,
    {
        self.elements.iter()
            .enumerate()
            .map(|(index, element)| Tuple::new(index, element.clone()))
            .collect()
    }

    fn filter_idx<F>(&self, mut f: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool,
    {
        self.elements.iter()
            .enumerate()
            .filter(|(index, element)| f(*index, *element))
            .map(|(_, element)| element.clone())
            .collect()
    }

    fn map_idx<U, F>(&self, mut f: F) -> Sequence<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        self.elements.iter()
            .enumerate()
            .map(|(index, element)| f(index, element))
            .collect()
    }
}

impl <T> traits::Revision<T> for Sequence<T> {
    fn update(&self, index: isize, element: T) -> anyhow::Result<Self>
    where
        T: Clone,
    {
        let position = self.position("update", index)?;
        let mut updated = self.elements.to_vec();
        updated[position] = element;
        Ok(Self::from_vec(updated))
    }

    fn inject(&self, updates: &Sequence<Tuple<usize, T>>) -> anyhow::Result<Self>
    where
        T: Clone,
    {
        let length = self.length();
        // validate everything first so a bad entry leaves no partial result behind
        if let Some(invalid) = updates.iter().find(|update| *update.a() >= length) {
            return Err(Error::out_of_bounds("inject", error::signed(*invalid.a()), length));
        }

        let mut injected = self.elements.to_vec();
        for update in updates.iter() {
            injected[*update.a()] = update.b().clone();
        }
        Ok(Self::from_vec(injected))
    }

    fn subseq(&self, start: isize, stop: isize) -> anyhow::Result<Self>
    where
        T: Clone,
    {
        let range = self.range("subseq", start, stop)?;
        Ok(Self::from(&self.elements[range]))
    }

    fn split(&self, index: isize) -> anyhow::Result<(Self, Self)>
    where
        T: Clone,
    {
        let length = self.length();
        let position = match usize::try_from(index) {
            Ok(position) if position <= length => position,
            _ => return Err(Error::out_of_bounds("split", index, length)),
        };

        let (left, right) = self.elements.split_at(position);
        Ok((Self::from(left), Self::from(right)))
    }
}

impl <T> traits::Equality<T> for Sequence<T> {
    fn equal<U, F>(&self, other: &Sequence<U>, mut f: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        if self.length() != other.length() {
            return false;
        }

        self.elements.iter()
            .zip(other.elements.iter())
            .all(|(a, b)| f(a, b))
    }
}

impl <T> traits::Render<T> for Sequence<T>
where
    T: Send + Sync + 'static
{
    fn render_with<F>(&self, f: F, configuration: &crate::RenderConfiguration) -> Pin<Box<dyn Future<Output = String> + Send + 'static>>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let elements = Arc::clone(&self.elements);
        let separator = configuration.separator.clone();

        Box::pin(async move {
            let count = elements.len();
            if count == 0 {
                return String::new();
            }

            let rendered = crate::render::fan_out(count, move |index| f(&elements[index])).await;
            rendered.join(&separator)
        })
    }
}

impl <T> traits::Bincode<T> for Sequence<T> {
    fn bincode(&self, configuration: &crate::BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        configuration.encode(self)
    }

    fn from_bincode(bytes: &[u8], configuration: &crate::BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        configuration.decode(bytes)
    }
}

#[cfg(test)]
mod tests;
