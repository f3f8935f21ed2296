//! Per-item layout attributes, viewport snapshots, and the plugin trait.
//!
//! A layout pass produces one [`ItemAttributes`] record per visible item and
//! runs it through an ordered list of [`FlowLayoutPlugin`]s. Plugins are pure
//! transforms: they receive the previous plugin's output and return an
//! enriched record. Attributes are recreated every pass — callers must not
//! retain them across passes and expect them to update.

use crate::geometry::{Alignment, Axis, EdgeInsets, Point, Rect, Size};
use crate::visibility::VisibilitySignal;

/// Layout attributes for one item in one layout pass.
///
/// Carries the item's geometry plus the decorations plugins have written so
/// far. Equality covers the decorations as well as the geometry: two
/// attributes are equal iff their frames and all decorated values match.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemAttributes {
    /// Position of the item in the collection.
    pub index: usize,
    /// The item's frame in content coordinates.
    pub frame: Rect,
    /// Visibility signals decorated by [`VisibilityPlugin`](crate::VisibilityPlugin).
    /// All `None` until that plugin has run.
    pub visibility: VisibilitySignal,
}

impl ItemAttributes {
    /// Undecorated attributes for an item at `index` with the given frame.
    pub const fn new(index: usize, frame: Rect) -> Self {
        Self {
            index,
            frame,
            visibility: VisibilitySignal::NONE,
        }
    }

    /// The item's center point.
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// The item's dimensions.
    pub const fn size(&self) -> Size {
        self.frame.size()
    }
}

/// Snapshot of the scrolling viewport, read once per layout pass.
///
/// Owned by the host scroll controller; the engine only reads it and never
/// mutates it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Visible bounds dimensions.
    pub bounds: Size,
    /// Current scroll offset of the content.
    pub content_offset: Point,
    /// Current scroll velocity of the content, in points per millisecond.
    pub velocity: Point,
}

impl Viewport {
    /// Create a viewport snapshot with zero velocity.
    pub const fn new(bounds: Size, content_offset: Point) -> Self {
        Self {
            bounds,
            content_offset,
            velocity: Point::ZERO,
        }
    }

    /// The rect of content currently visible.
    pub const fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.bounds)
    }
}

/// A stateless transform applied to each visible item's attributes.
///
/// Plugins run in the order the engine holds them; later plugins see earlier
/// decorations. The default implementation is the identity, so a plugin that
/// only cares about some configurations does not need to handle every case.
/// Implementations must be side-effect-free — layout passes may be invoked
/// speculatively or repeatedly.
pub trait FlowLayoutPlugin {
    /// Return `attributes` enriched with this plugin's derived fields.
    fn decorate(
        &self,
        attributes: ItemAttributes,
        viewport: &Viewport,
        axis: Axis,
        alignment: Option<Alignment>,
        section_inset: EdgeInsets,
    ) -> ItemAttributes {
        let _ = (viewport, axis, alignment, section_inset);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoOpPlugin;

    impl FlowLayoutPlugin for NoOpPlugin {}

    #[test]
    fn default_decorate_is_identity() {
        let attributes = ItemAttributes::new(3, Rect::new(100.0, 0.0, 100.0, 100.0));
        let viewport = Viewport::new(Size::new(300.0, 100.0), Point::ZERO);
        let decorated = NoOpPlugin.decorate(
            attributes,
            &viewport,
            Axis::Horizontal,
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(decorated, attributes);
    }

    #[test]
    fn equality_covers_decorations() {
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        let plain = ItemAttributes::new(0, frame);
        let mut decorated = plain;
        decorated.visibility.collection = Some(0.5);
        assert_ne!(plain, decorated);
        assert_eq!(plain, ItemAttributes::new(0, frame));
    }

    #[test]
    fn fresh_attributes_have_no_signals() {
        let attributes = ItemAttributes::new(0, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(attributes.visibility, VisibilitySignal::NONE);
        assert!(attributes.visibility.collection.is_none());
    }

    #[test]
    fn visible_rect_tracks_offset() {
        let viewport = Viewport::new(Size::new(300.0, 100.0), Point::new(70.0, 0.0));
        assert_eq!(viewport.visible_rect(), Rect::new(70.0, 0.0, 300.0, 100.0));
    }
}
