
pub use {
    crate::sequence::{Sequence, Tuple},
    crate::sequence::traits::{Construction, Access, Length, Transform, Revision, Equality, Render, Bincode},
    crate::{BincodeConfiguration, RenderConfiguration},
    crate::render::Renderer,
};
