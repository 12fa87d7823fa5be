//! Component model.
//!
//! Defines the [`Component`] trait with its lifecycle hooks and the
//! dyn-compatible [`AnyComponent`] wrapper used by the application loop.

pub mod traits;

pub use traits::{Action, AnyComponent, Component, Event};
