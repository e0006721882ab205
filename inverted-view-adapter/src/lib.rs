//! Adapter utilities for the `inverted-view` crate.
//!
//! The `inverted-view` crate is UI-agnostic and focuses on the core compensation math
//! and state. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - Abstract batched observation sources (size changes, structural child changes)
//!   with queue-backed implementations usable as polling adapters or test doubles
//! - A `Controller` that wraps a view, pumps sources into it, and exposes the
//!   imperative scroll handle
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod source;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use key::ViewKey;
pub use source::{
    QueuedChildSource, QueuedSizeSource, SizeChangeSource, StructuralChangeSource,
};
