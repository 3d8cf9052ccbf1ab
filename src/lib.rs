//! Immutable, value-like sequences.
//!
//! A [`Sequence<T>`] is a finite, ordered collection that never
//! changes after construction: indexing, mapping, filtering, zipping, concatenation and
//! sub-range extraction all return new sequences. Rendering a sequence to a string
//! converts every element concurrently and still joins the results in index order.
//!
//! ```
//! use sequin::prelude::*;
//!
//! let sequence = Sequence::from_slice(&[1, 2, 3]);
//! let doubled = sequence.map(|n| n * 2);
//!
//! assert_eq!(doubled.to_slice(), vec![2, 4, 6]);
//! assert_eq!(sequence.to_slice(), vec![1, 2, 3]);
//! ```
//!
//! The core types are also re-exported at the crate root:
//!
//! ```
//! use sequin::{Sequence, Tuple};
//!
//! let pairs: Sequence<Tuple<usize, char>> = "ab".chars().enumerate().map(Tuple::from).collect();
//! assert_eq!(pairs[1], Tuple::new(1, 'b'));
//! ```

pub mod config;
pub mod error;
pub mod mpmc;
pub mod render;
pub mod sequence;

pub use config::{BincodeConfiguration, RenderConfiguration};
pub use render::Renderer;
pub use sequence::{Sequence, Tuple};

pub mod prelude {
    pub use crate::sequence::prelude::*;
}
