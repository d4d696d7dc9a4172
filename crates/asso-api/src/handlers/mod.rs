//! HTTP request handlers
//!
//! Thin functions that translate HTTP requests into service calls.
//! Public site handlers and admin handlers live side by side; admin
//! handlers require the [`crate::extractors::AdminAuth`] extractor.

pub mod auth;
pub mod events;
pub mod health;
pub mod logs;
pub mod lookups;
pub mod media;
pub mod messages;
pub mod publications;
pub mod registrations;
pub mod support;
