//! Value objects - immutable domain primitives

mod slug;

pub use slug::{Slug, SlugError};
