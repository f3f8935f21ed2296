//! The flow layout engine: plugin pipeline and snap resolver.
//!
//! [`FlowLayout`] holds the immutable configuration (axis, alignment, plugin
//! list) and drives two operations against a [`LayoutSource`]:
//!
//! - [`attributes_in_rect`](FlowLayout::attributes_in_rect) — enumerate the
//!   source's items in a query rect and fold the plugin pipeline over each,
//!   once per layout pass.
//! - [`target_content_offset`](FlowLayout::target_content_offset) — at
//!   gesture end, decide which item the viewport should rest on and return
//!   its aligned offset.
//!
//! Both are pure functions of their inputs plus the configuration; nothing
//! is cached across calls.

use alloc::boxed::Box;
use alloc::vec::Vec;

use num_traits::Float;

use crate::geometry::{Alignment, Axis, EdgeInsets, Point, Rect};
use crate::plugin::{FlowLayoutPlugin, ItemAttributes, Viewport};

/// Release velocities above this magnitude (points per millisecond along the
/// scroll axis) always snap in the direction of travel, regardless of which
/// candidate is closer.
pub const FAST_VELOCITY_THRESHOLD: f64 = 0.3;

/// The base layout being decorated — an external collaborator that places
/// items and owns the section inset.
///
/// The engine only needs item enumeration for a query rect; it never writes
/// back. [`LineSource`](crate::LineSource) is the in-crate reference
/// implementation.
pub trait LayoutSource {
    /// Undecorated attributes for every item whose frame intersects `rect`.
    fn items_in_rect(&self, rect: Rect) -> Vec<ItemAttributes>;

    /// The inset around the section's items.
    fn section_inset(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }
}

/// A pluggable flow layout for a line of fixed-size items along one axis.
///
/// Configuration is fixed at construction: the scroll axis, an optional
/// snap alignment, and an ordered plugin list appended with
/// [`plugin`](Self::plugin).
///
/// # Example
///
/// ```
/// use snaplayout::{
///     Alignment, Axis, FlowLayout, LineSource, Point, Size, VisibilityPlugin, Viewport,
/// };
///
/// let layout = FlowLayout::new(Axis::Horizontal, Some(Alignment::Center))
///     .plugin(VisibilityPlugin);
/// let source = LineSource::new(Axis::Horizontal, 10, Size::new(100.0, 100.0));
/// let viewport = Viewport::new(Size::new(300.0, 100.0), Point::ZERO);
///
/// let visible = layout.attributes_in_rect(&source, viewport.visible_rect(), &viewport);
/// assert_eq!(visible.len(), 3);
/// assert!(visible[1].visibility.ideal_frame.is_some());
/// ```
pub struct FlowLayout {
    axis: Axis,
    alignment: Option<Alignment>,
    plugins: Vec<Box<dyn FlowLayoutPlugin>>,
}

impl FlowLayout {
    /// Create a layout with no plugins. `alignment: None` disables snapping.
    pub fn new(axis: Axis, alignment: Option<Alignment>) -> Self {
        Self {
            axis,
            alignment,
            plugins: Vec::new(),
        }
    }

    /// Append a plugin to the pipeline. Order matters: later plugins see
    /// earlier plugins' decorations.
    pub fn plugin(mut self, plugin: impl FlowLayoutPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The configured scroll axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The configured snap alignment, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Decorated attributes for every item intersecting `rect`.
    ///
    /// Enumerates the source's items, then applies the plugin pipeline to
    /// each. Deterministic: identical inputs yield identical records.
    pub fn attributes_in_rect<S: LayoutSource>(
        &self,
        source: &S,
        rect: Rect,
        viewport: &Viewport,
    ) -> Vec<ItemAttributes> {
        let inset = source.section_inset();
        source
            .items_in_rect(rect)
            .into_iter()
            .map(|mut attributes| {
                for plugin in &self.plugins {
                    attributes =
                        plugin.decorate(attributes, viewport, self.axis, self.alignment, inset);
                }
                attributes
            })
            .collect()
    }

    /// The offset the viewport should animate to when a scroll gesture ends
    /// with the given proposed rest offset and release velocity.
    ///
    /// Snaps to one of the two items nearest the alignment line: the one
    /// behind it and the one ahead of it. A fast release always snaps in the
    /// direction of travel; a slow one snaps to whichever candidate is
    /// closer. With no alignment configured, or no items in range of the
    /// proposed offset, the proposed offset passes through unchanged. Only
    /// the scroll-axis coordinate is resolved; the orthogonal coordinate is
    /// preserved from `proposed`.
    pub fn target_content_offset<S: LayoutSource>(
        &self,
        source: &S,
        viewport: &Viewport,
        proposed: Point,
        velocity: Point,
    ) -> Point {
        let Some(alignment) = self.alignment else {
            return proposed;
        };
        let inset = source.section_inset();
        let query = Rect::from_origin_size(proposed, viewport.bounds);
        let candidates = source.items_in_rect(query);
        let (prev, next) = self.nearest_items(candidates, viewport, alignment, inset);

        let chosen = match (prev, next) {
            (None, None) => return proposed,
            (Some(only), None) | (None, Some(only)) => only,
            (Some(prev), Some(next)) => {
                let velocity_value = self.axis.value(&velocity);
                let is_fast = Float::abs(velocity_value) > FAST_VELOCITY_THRESHOLD;
                let next_closer = Float::abs(self.line_diff(&next, viewport, alignment, inset))
                    < Float::abs(self.line_diff(&prev, viewport, alignment, inset));
                if is_fast && velocity_value > 0.0 || !is_fast && next_closer {
                    next
                } else {
                    prev
                }
            }
        };

        let value = self.aligned_offset(&chosen, viewport, alignment, inset);
        self.axis.with_value(value, proposed)
    }

    /// Partition candidates into the nearest item behind the alignment line
    /// (diff ≤ 0) and the nearest ahead of it (diff > 0).
    fn nearest_items(
        &self,
        candidates: Vec<ItemAttributes>,
        viewport: &Viewport,
        alignment: Alignment,
        inset: EdgeInsets,
    ) -> (Option<ItemAttributes>, Option<ItemAttributes>) {
        let mut prev: Option<ItemAttributes> = None;
        let mut next: Option<ItemAttributes> = None;
        let mut prev_min = f64::INFINITY;
        let mut next_min = f64::INFINITY;

        for candidate in candidates {
            let diff = self.line_diff(&candidate, viewport, alignment, inset);
            if diff > 0.0 {
                if Float::abs(diff) < next_min {
                    next_min = Float::abs(diff);
                    next = Some(candidate);
                }
            } else if Float::abs(diff) < prev_min {
                prev_min = Float::abs(diff);
                prev = Some(candidate);
            }
        }

        (prev, next)
    }

    /// Signed distance from the item's reference position to the alignment
    /// line at the current content offset. Negative: the item sits behind
    /// the line.
    fn line_diff(
        &self,
        item: &ItemAttributes,
        viewport: &Viewport,
        alignment: Alignment,
        inset: EdgeInsets,
    ) -> f64 {
        let axis = self.axis;
        let offset = axis.value(&viewport.content_offset);
        match alignment {
            Alignment::Start => {
                axis.leading(&item.frame) - (offset + axis.inset_before(&inset))
            }
            Alignment::Center => {
                axis.midpoint(&item.frame) - (offset + axis.extent(&viewport.bounds) / 2.0)
            }
            Alignment::End => {
                axis.trailing(&item.frame)
                    - (offset + axis.extent(&viewport.bounds) + axis.inset_after(&inset))
            }
        }
    }

    /// The content offset at which the item rests exactly on the alignment
    /// line.
    fn aligned_offset(
        &self,
        item: &ItemAttributes,
        viewport: &Viewport,
        alignment: Alignment,
        inset: EdgeInsets,
    ) -> f64 {
        let axis = self.axis;
        match alignment {
            Alignment::Start => axis.leading(&item.frame) - axis.inset_before(&inset),
            Alignment::Center => {
                axis.midpoint(&item.frame) - axis.extent(&viewport.bounds) / 2.0
            }
            Alignment::End => {
                axis.trailing(&item.frame) - axis.extent(&viewport.bounds)
                    + axis.inset_after(&inset)
            }
        }
    }
}
