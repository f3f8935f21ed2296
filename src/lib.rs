//! Snapping flow layout computation for carousel-style scrolling collections.
//!
//! Pure geometry — no rendering, no view hierarchy, no allocations in the
//! core math, `no_std` compatible.
//!
//! Items of fixed size scroll along a single axis and snap to an alignment
//! line (start, center, or end of the viewport). A plugin pipeline decorates
//! each visible item with continuous visibility signals in `[-1, 1]` that a
//! rendering layer can feed into parallax and fade effects.
//!
//! # Modules
//!
//! - [`geometry`] — Axis, alignment, and projection of 2D quantities onto the scroll axis
//! - [`plugin`] — Per-item layout attributes, viewport snapshots, and the plugin trait
//! - [`visibility`] — The visibility-signal plugin and its signed-window math
//! - [`layout`] — The flow layout engine: plugin pipeline and snap resolver
//! - [`line`] — A minimal fixed-size line source for hosts and tests

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
#[cfg(feature = "alloc")]
pub mod layout;
#[cfg(feature = "alloc")]
pub mod line;
pub mod plugin;
pub mod visibility;

// Re-exports: core types from each module
pub use geometry::{Alignment, Axis, EdgeInsets, Point, Rect, Size};
#[cfg(feature = "alloc")]
pub use layout::{FAST_VELOCITY_THRESHOLD, FlowLayout, LayoutSource};
#[cfg(feature = "alloc")]
pub use line::LineSource;
pub use plugin::{FlowLayoutPlugin, ItemAttributes, Viewport};
pub use visibility::{VisibilityPlugin, VisibilitySignal};
