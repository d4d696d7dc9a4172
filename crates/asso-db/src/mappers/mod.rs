//! Model ↔ entity mappers
//!
//! This is the single place where legacy column values are translated into
//! the domain vocabulary: `statut` markers, the `origine` category column,
//! the `confirmed` flag, and the French field names. Nothing above this
//! layer sees the legacy spelling.

mod admin_log;
mod event;
mod lookup;
mod media;
mod message;
mod participant;
mod publication;
mod support;

pub use event::{statut_from_column, statut_to_column};
