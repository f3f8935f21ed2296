//! Visibility signals: continuous proximity metrics for parallax and fades.
//!
//! [`VisibilityPlugin`] decorates each visible item with three signed scalars
//! in `[-1, 1]`, each answering "how close is this item to a particular
//! reference window, and on which side". Magnitude 1 means fully outside the
//! window, 0 means exactly at the ideal position; the sign tells whether the
//! before or after side of the window dominates.
//!
//! All divisions are guarded: a zero ideal distance means "no meaningful
//! window" on that side and never produces a non-finite value.

use num_traits::Float;

use crate::geometry::{Alignment, Axis, EdgeInsets};
use crate::plugin::{FlowLayoutPlugin, ItemAttributes, Viewport};

/// The three visibility signals decorated onto an item.
///
/// Each is `None` before [`VisibilityPlugin`] has run — absence is distinct
/// from a computed 0.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VisibilitySignal {
    /// Proximity to the viewport's edges, within one item-length.
    /// Ramps from −1 (fully outside the leading edge) through 0 (inside)
    /// to +1 (fully outside the trailing edge).
    pub collection: Option<f64>,
    /// Proximity to the item's eventual resting position on the alignment
    /// line. 0 exactly at rest, saturating at ±1 one window-width away.
    pub ideal_frame: Option<f64>,
    /// A wider window blending the viewport edges and the resting position —
    /// a smooth transition metric across the item's entire traversal of the
    /// viewport.
    pub ideal_frame_and_collection: Option<f64>,
}

impl VisibilitySignal {
    /// No signals computed yet.
    pub const NONE: Self = Self {
        collection: None,
        ideal_frame: None,
        ideal_frame_and_collection: None,
    };
}

/// Axis-projected quantities shared by the three signal computations,
/// captured once per item.
struct Metrics {
    alignment: Option<Alignment>,
    collection: f64,
    half_collection: f64,
    item: f64,
    half_item: f64,
    offset: f64,
    item_mid: f64,
    inset_before: f64,
    inset_after: f64,
}

impl Metrics {
    fn capture(
        attributes: &ItemAttributes,
        viewport: &Viewport,
        axis: Axis,
        alignment: Option<Alignment>,
        section_inset: EdgeInsets,
    ) -> Self {
        let collection = axis.extent(&viewport.bounds);
        let item = axis.extent(&attributes.size());
        Self {
            alignment,
            collection,
            half_collection: collection / 2.0,
            item,
            half_item: item / 2.0,
            offset: axis.value(&viewport.content_offset),
            item_mid: axis.midpoint(&attributes.frame),
            inset_before: axis.inset_before(&section_inset),
            inset_after: axis.inset_after(&section_inset),
        }
    }

    /// Distance from the item's midpoint to the viewport's leading edge,
    /// offset outward by half the item.
    fn current_before(&self) -> f64 {
        self.item_mid - (self.offset - self.half_item)
    }

    /// Distance from the item's midpoint to the viewport's trailing edge,
    /// offset outward by half the item.
    fn current_after(&self) -> f64 {
        self.item_mid - (self.offset + self.collection + self.half_item)
    }
}

/// Computes the three visibility signals for every visible item.
///
/// # Example
///
/// ```
/// use snaplayout::{
///     Alignment, Axis, EdgeInsets, FlowLayoutPlugin, ItemAttributes, Point, Rect, Size,
///     VisibilityPlugin, Viewport,
/// };
///
/// // A 100pt item centered in a 300pt viewport is exactly at rest.
/// let attributes = ItemAttributes::new(1, Rect::new(100.0, 0.0, 100.0, 100.0));
/// let viewport = Viewport::new(Size::new(300.0, 100.0), Point::ZERO);
///
/// let decorated = VisibilityPlugin.decorate(
///     attributes,
///     &viewport,
///     Axis::Horizontal,
///     Some(Alignment::Center),
///     EdgeInsets::ZERO,
/// );
///
/// assert_eq!(decorated.visibility.ideal_frame, Some(0.0));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct VisibilityPlugin;

impl FlowLayoutPlugin for VisibilityPlugin {
    fn decorate(
        &self,
        mut attributes: ItemAttributes,
        viewport: &Viewport,
        axis: Axis,
        alignment: Option<Alignment>,
        section_inset: EdgeInsets,
    ) -> ItemAttributes {
        let m = Metrics::capture(&attributes, viewport, axis, alignment, section_inset);
        attributes.visibility = VisibilitySignal {
            collection: Some(collection_visibility(&m)),
            ideal_frame: Some(ideal_frame_visibility(&m)),
            ideal_frame_and_collection: Some(ideal_frame_and_collection_visibility(&m)),
        };
        attributes
    }
}

/// Whether the item is within one item-length of the viewport edges.
fn collection_visibility(m: &Metrics) -> f64 {
    signed_visibility(m.item, m.item, m.current_before(), m.current_after())
}

/// Whether the item is near its eventual resting position.
fn ideal_frame_visibility(m: &Metrics) -> f64 {
    match m.alignment {
        Some(Alignment::Center) | None => signed_visibility(
            m.item,
            m.item,
            m.item_mid - (m.offset + m.half_collection - m.item),
            m.item_mid - (m.offset + m.half_collection + m.item),
        ),
        Some(Alignment::Start) => signed_visibility(
            m.item,
            m.item,
            m.item_mid - (m.offset + m.inset_before - m.half_item),
            m.item_mid - (m.offset + m.inset_before + m.half_item + m.item),
        ),
        Some(Alignment::End) => signed_visibility(
            m.item,
            m.item,
            m.item_mid - (m.offset + m.collection - m.inset_after - m.half_item - m.item),
            m.item_mid - (m.offset + m.collection - m.inset_after + m.half_item),
        ),
    }
}

/// A window spanning the whole traversal of the viewport, from entering at
/// one edge to resting on the alignment line to leaving at the other edge.
///
/// The Start/End windows are asymmetric on purpose: the near side spans one
/// item plus the inset, the far side the remaining collection span.
fn ideal_frame_and_collection_visibility(m: &Metrics) -> f64 {
    match m.alignment {
        Some(Alignment::Center) | None => signed_visibility(
            m.half_collection + m.half_item,
            m.half_collection + m.half_item,
            m.current_before(),
            m.current_after(),
        ),
        Some(Alignment::Start) => signed_visibility(
            m.item + m.inset_before,
            m.half_item + (m.collection - m.half_item - m.inset_before),
            m.current_before(),
            m.current_after(),
        ),
        Some(Alignment::End) => signed_visibility(
            m.half_item + (m.collection - m.half_item - m.inset_after),
            m.item + m.inset_after,
            m.current_before(),
            m.current_after(),
        ),
    }
}

/// Signed proximity of an item to a reference window.
///
/// `current_before` / `current_after` are the item's actual distances to the
/// window's two edges; `ideal_before` / `ideal_after` are the distances at
/// which the item counts as fully outside. Whichever side's ratio is smaller
/// in magnitude wins: the before side yields a non-positive result, the after
/// side a non-negative one. Output is always in `[-1, 1]` for finite inputs;
/// a zero ideal distance removes that side from consideration, and with both
/// sides degenerate the result is 0.
pub fn signed_visibility(
    ideal_before: f64,
    ideal_after: f64,
    current_before: f64,
    current_after: f64,
) -> f64 {
    let before = ratio(current_before, ideal_before);
    let after = ratio(current_after, ideal_after);
    match (before, after) {
        (None, None) => 0.0,
        (Some(before), None) => normalized(before.max(0.0), false),
        (None, Some(after)) => normalized(after.min(0.0), true),
        (Some(before), Some(after)) => {
            if Float::abs(before) < Float::abs(after) {
                normalized(before.max(0.0), false)
            } else {
                normalized(after.min(0.0), true)
            }
        }
    }
}

fn ratio(current: f64, ideal: f64) -> Option<f64> {
    if ideal == 0.0 {
        None
    } else {
        Some(current / ideal)
    }
}

fn normalized(value: f64, positive: bool) -> f64 {
    let sign = if positive { 1.0 } else { -1.0 };
    sign * (1.0 - Float::abs(value).min(1.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};

    fn decorate(
        frame: Rect,
        viewport: &Viewport,
        alignment: Option<Alignment>,
        inset: EdgeInsets,
    ) -> VisibilitySignal {
        VisibilityPlugin
            .decorate(
                ItemAttributes::new(0, frame),
                viewport,
                Axis::Horizontal,
                alignment,
                inset,
            )
            .visibility
    }

    fn viewport_300() -> Viewport {
        Viewport::new(Size::new(300.0, 100.0), Point::ZERO)
    }

    // ── signed_visibility ───────────────────────────────────────────────

    #[test]
    fn at_ideal_distance_is_zero() {
        // Both sides exactly at their ideal distance.
        assert_eq!(signed_visibility(100.0, 100.0, 100.0, -100.0), 0.0);
    }

    #[test]
    fn before_side_ramps_negative() {
        // Halfway into the before window → −0.5.
        assert_eq!(signed_visibility(100.0, 100.0, 50.0, -250.0), -0.5);
        // At the before window edge → −1.
        assert_eq!(signed_visibility(100.0, 100.0, 0.0, -300.0), -1.0);
    }

    #[test]
    fn after_side_ramps_positive() {
        assert_eq!(signed_visibility(100.0, 100.0, 250.0, -50.0), 0.5);
        assert_eq!(signed_visibility(100.0, 100.0, 300.0, 0.0), 1.0);
    }

    #[test]
    fn saturates_beyond_window() {
        // Far past the before edge: ratio is negative, magnitude capped at 1.
        assert_eq!(signed_visibility(100.0, 100.0, -500.0, -800.0), -1.0);
        // Far past the after edge.
        assert_eq!(signed_visibility(100.0, 100.0, 800.0, 500.0), 1.0);
    }

    #[test]
    fn zero_ideal_distance_is_defined() {
        // Degenerate window on both sides → 0, not NaN or infinity.
        assert_eq!(signed_visibility(0.0, 0.0, 50.0, -50.0), 0.0);
        // One degenerate side cedes to the other.
        assert_eq!(signed_visibility(0.0, 100.0, 50.0, 0.0), 1.0);
        assert_eq!(signed_visibility(100.0, 0.0, 0.0, -50.0), -1.0);
    }

    #[test]
    fn output_stays_in_unit_range() {
        let extremes = [-1e9, -300.0, -1.0, 0.0, 1.0, 300.0, 1e9];
        for &cb in &extremes {
            for &ca in &extremes {
                for &ideal in &[0.0, 1.0, 100.0] {
                    let v = signed_visibility(ideal, ideal, cb, ca);
                    assert!((-1.0..=1.0).contains(&v), "out of range: {v}");
                    assert!(v.is_finite());
                }
            }
        }
    }

    // ── collection visibility ───────────────────────────────────────────

    #[test]
    fn item_deep_inside_viewport_is_zero() {
        // 100pt item centered in a 300pt viewport: both edges saturated.
        let signal = decorate(
            Rect::new(100.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(signal.collection, Some(0.0));
    }

    #[test]
    fn item_entering_from_leading_edge() {
        // Frame just fully outside the left edge → −1.
        let outside = decorate(
            Rect::new(-100.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(outside.collection, Some(-1.0));

        // Straddling the left edge → −0.5.
        let straddling = decorate(
            Rect::new(-50.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(straddling.collection, Some(-0.5));
    }

    #[test]
    fn item_leaving_at_trailing_edge() {
        // Frame just fully outside the right edge → +1.
        let outside = decorate(
            Rect::new(300.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(outside.collection, Some(1.0));

        // Straddling the right edge → +0.5.
        let straddling = decorate(
            Rect::new(250.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(straddling.collection, Some(0.5));
    }

    // ── ideal frame visibility ──────────────────────────────────────────

    #[test]
    fn centered_item_rests_at_zero() {
        let signal = decorate(
            Rect::new(100.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(signal.ideal_frame, Some(0.0));
        // Same window with no alignment configured.
        let unaligned = decorate(
            Rect::new(100.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            None,
            EdgeInsets::ZERO,
        );
        assert_eq!(unaligned.ideal_frame, Some(0.0));
    }

    #[test]
    fn item_halfway_to_center_reads_half() {
        // Item mid at 100, resting mid at 150, window width 100 → −0.5.
        let signal = decorate(
            Rect::new(50.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(signal.ideal_frame, Some(-0.5));
    }

    #[test]
    fn item_one_window_from_center_saturates() {
        // Item mid at 50, one full item-length before rest → −1.
        let signal = decorate(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(signal.ideal_frame, Some(-1.0));
    }

    #[test]
    fn start_aligned_item_rests_past_leading_inset() {
        let inset = EdgeInsets::new(0.0, 10.0, 0.0, 10.0);
        // Resting frame for Start alignment: leading edge at inset.left.
        let signal = decorate(
            Rect::new(10.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Start),
            inset,
        );
        assert_eq!(signal.ideal_frame, Some(0.0));
    }

    #[test]
    fn end_aligned_item_rests_inside_trailing_inset() {
        let inset = EdgeInsets::new(0.0, 10.0, 0.0, 10.0);
        // Resting frame for End alignment: trailing edge at 300 − inset.right.
        let signal = decorate(
            Rect::new(190.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::End),
            inset,
        );
        assert_eq!(signal.ideal_frame, Some(0.0));
    }

    // ── ideal frame and collection visibility ───────────────────────────

    #[test]
    fn blended_window_is_zero_at_rest() {
        let signal = decorate(
            Rect::new(100.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(signal.ideal_frame_and_collection, Some(0.0));
    }

    #[test]
    fn blended_window_ramps_across_whole_traversal() {
        // Item mid at 0 (straddling the leading edge): distance to rest is
        // 150 of an ideal 200 → −0.75.
        let entering = decorate(
            Rect::new(-50.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(entering.ideal_frame_and_collection, Some(-0.75));

        // Mirrored on the trailing side.
        let leaving = decorate(
            Rect::new(250.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(leaving.ideal_frame_and_collection, Some(0.75));
    }

    #[test]
    fn start_alignment_blended_window_is_asymmetric() {
        let inset = EdgeInsets::new(0.0, 10.0, 0.0, 10.0);
        // At rest for Start alignment (mid 60): before distance 110 of an
        // ideal 110 → ratio 1; after distance −290 of an ideal 290 → ratio
        // −1; the after side wins the tie and reads 0.
        let signal = decorate(
            Rect::new(10.0, 0.0, 100.0, 100.0),
            &viewport_300(),
            Some(Alignment::Start),
            inset,
        );
        assert_eq!(signal.ideal_frame_and_collection, Some(0.0));
    }

    #[test]
    fn vertical_axis_reads_y_geometry() {
        let viewport = Viewport::new(Size::new(100.0, 300.0), Point::ZERO);
        let decorated = VisibilityPlugin.decorate(
            ItemAttributes::new(0, Rect::new(0.0, 100.0, 100.0, 100.0)),
            &viewport,
            Axis::Vertical,
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(decorated.visibility.ideal_frame, Some(0.0));
        assert_eq!(decorated.visibility.collection, Some(0.0));
    }

    #[test]
    fn zero_size_viewport_and_item_are_defined() {
        let viewport = Viewport::new(Size::ZERO, Point::ZERO);
        let decorated = VisibilityPlugin.decorate(
            ItemAttributes::new(0, Rect::new(0.0, 0.0, 0.0, 0.0)),
            &viewport,
            Axis::Horizontal,
            Some(Alignment::Center),
            EdgeInsets::ZERO,
        );
        assert_eq!(decorated.visibility.collection, Some(0.0));
        assert_eq!(decorated.visibility.ideal_frame, Some(0.0));
        assert_eq!(decorated.visibility.ideal_frame_and_collection, Some(0.0));
    }
}
