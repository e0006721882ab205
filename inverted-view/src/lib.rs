//! A headless bottom-anchored (inverted) scroll container engine.
//!
//! For adapter-level utilities (controllers, observation sources), see the
//! `inverted-view-adapter` crate.
//!
//! This crate implements the scroll-compensation math of a chat/log style view: new
//! content is appended at the bottom, and the viewport stays visually anchored even as
//! off-screen content above it resizes, is inserted, or is removed. Each batch of
//! observed changes is reduced to a single scroll-offset delta that cancels the visual
//! effect of every mutation at or above the bottom edge of the visible window.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport (container) and content heights as they are observed
//! - per-child measurements, keyed by a stable child identity
//! - scroll offsets from the platform's scroll events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod reporter;
mod types;
mod view;


pub use options::{OnScrollCallback, ViewOptions};
pub use reporter::ScrollReporter;
pub use types::{ChildChange, ChildMetrics, ScrollHandle, ScrollValues, SizeRecord};
pub use view::InvertedView;

#[doc(hidden)]
pub use key::ChildKey;
