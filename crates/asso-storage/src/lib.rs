//! # asso-storage
//!
//! Filesystem-backed implementation of the `ObjectStore` port. Uploaded
//! objects live under a root directory (served statically by the API) and
//! are addressed by relative paths like `media/<object-name>`.

mod local;

pub use local::LocalObjectStore;
