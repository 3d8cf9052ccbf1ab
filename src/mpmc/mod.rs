//! Multi-producer buffers used as fan-in targets.

pub mod slots;
