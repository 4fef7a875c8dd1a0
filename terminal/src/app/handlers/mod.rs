//! # User Action Handlers
//!
//! Handlers for user interactions. Each takes the shared state and holds the
//! write lock only for the duration of the mutation.

pub mod modal;
pub mod navigation;
pub mod settings;
pub mod swap;
