//! A minimal base layout placing fixed-size items along a line.
//!
//! Stands in for the host platform's flow layout: items of one size laid
//! out along the scroll axis with uniform spacing inside a section inset.
//! Used by the integration tests and as a reference [`LayoutSource`] for
//! hosts that do not bring their own.

use alloc::vec::Vec;

use crate::geometry::{Axis, EdgeInsets, Rect, Size};
use crate::layout::LayoutSource;
use crate::plugin::ItemAttributes;

/// Fixed-size items in a line along one axis.
///
/// # Example
///
/// ```
/// use snaplayout::{Axis, EdgeInsets, LayoutSource, LineSource, Rect, Size};
///
/// let source = LineSource::new(Axis::Horizontal, 5, Size::new(100.0, 100.0))
///     .spacing(10.0)
///     .section_inset(EdgeInsets::new(0.0, 20.0, 0.0, 20.0));
///
/// let items = source.items_in_rect(Rect::new(0.0, 0.0, 300.0, 100.0));
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[1].frame, Rect::new(130.0, 0.0, 100.0, 100.0));
/// assert_eq!(source.content_extent(), 580.0);
/// ```
#[derive(Clone, Debug)]
pub struct LineSource {
    axis: Axis,
    count: usize,
    item_size: Size,
    spacing: f64,
    inset: EdgeInsets,
}

impl LineSource {
    /// `count` items of `item_size` along `axis`, with no spacing or inset.
    pub const fn new(axis: Axis, count: usize, item_size: Size) -> Self {
        Self {
            axis,
            count,
            item_size,
            spacing: 0.0,
            inset: EdgeInsets::ZERO,
        }
    }

    /// Set the gap between adjacent items.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the inset around the whole line of items.
    pub fn section_inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    /// Number of items.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The frame of the item at `index`.
    pub fn frame(&self, index: usize) -> Rect {
        let step = self.axis.extent(&self.item_size) + self.spacing;
        let along = self.axis.inset_before(&self.inset) + index as f64 * step;
        match self.axis {
            Axis::Horizontal => Rect::new(
                along,
                self.inset.top,
                self.item_size.width,
                self.item_size.height,
            ),
            Axis::Vertical => Rect::new(
                self.inset.left,
                along,
                self.item_size.width,
                self.item_size.height,
            ),
        }
    }

    /// Total content length along the axis, insets included.
    pub fn content_extent(&self) -> f64 {
        if self.count == 0 {
            return self.axis.inset_before(&self.inset) + self.axis.inset_after(&self.inset);
        }
        self.axis.inset_before(&self.inset)
            + self.count as f64 * self.axis.extent(&self.item_size)
            + (self.count - 1) as f64 * self.spacing
            + self.axis.inset_after(&self.inset)
    }
}

impl LayoutSource for LineSource {
    fn items_in_rect(&self, rect: Rect) -> Vec<ItemAttributes> {
        (0..self.count)
            .map(|index| ItemAttributes::new(index, self.frame(index)))
            .filter(|attributes| attributes.frame.intersects(&rect))
            .collect()
    }

    fn section_inset(&self) -> EdgeInsets {
        self.inset
    }
}
