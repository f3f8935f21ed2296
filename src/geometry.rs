//! Scroll-axis projection of 2D geometry.
//!
//! Everything the engine computes happens along a single scroll axis. This
//! module holds the 2D primitives plus the [`Axis`] projections that resolve
//! a rectangle, point, size, or inset to the scalar relevant to that axis.
//! Pure functions, total over their domain — no failure modes.

/// A position in the scroll coordinate space, in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height dimensions in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in scroll coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect from origin and dimensions.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect from an origin point and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Dimensions.
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the two rects overlap with non-empty intersection.
    /// Rects that only touch at an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// Four-sided inset around a section's items, in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// No inset on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create a new inset.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// The single scroll dimension all projections resolve onto.
///
/// Immutable per layout instance. `Horizontal` selects X-derived components
/// (min/mid/max X, width, x, left/right); `Vertical` selects Y-derived
/// (min/mid/max Y, height, y, top/bottom).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items scroll left–right; projections read X, width, left/right.
    Horizontal,
    /// Items scroll top–bottom; projections read Y, height, top/bottom.
    Vertical,
}

impl Axis {
    /// The rect's leading edge along this axis (minX / minY).
    pub fn leading(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    /// The rect's midpoint along this axis (midX / midY).
    pub fn midpoint(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x + rect.width / 2.0,
            Self::Vertical => rect.y + rect.height / 2.0,
        }
    }

    /// The rect's trailing edge along this axis (maxX / maxY).
    pub fn trailing(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.max_x(),
            Self::Vertical => rect.max_y(),
        }
    }

    /// The size's extent along this axis (width / height).
    pub fn extent(self, size: &Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The point's coordinate along this axis (x / y).
    pub fn value(self, point: &Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// The inset on the leading side of this axis (left / top).
    pub fn inset_before(self, insets: &EdgeInsets) -> f64 {
        match self {
            Self::Horizontal => insets.left,
            Self::Vertical => insets.top,
        }
    }

    /// The inset on the trailing side of this axis (right / bottom).
    pub fn inset_after(self, insets: &EdgeInsets) -> f64 {
        match self {
            Self::Horizontal => insets.right,
            Self::Vertical => insets.bottom,
        }
    }

    /// Build a point whose coordinate along this axis is `value`, keeping the
    /// orthogonal coordinate from `orthogonal`.
    pub fn with_value(self, value: f64, orthogonal: Point) -> Point {
        match self {
            Self::Horizontal => Point::new(value, orthogonal.y),
            Self::Vertical => Point::new(orthogonal.x, value),
        }
    }
}

/// The reference line within the viewport that items snap to.
///
/// `None` in the engine's configuration means no snapping at all — the
/// proposed scroll offset passes through unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Items rest with their leading edge at the viewport start, past the
    /// leading section inset.
    Start,
    /// Items rest centered in the viewport.
    Center,
    /// Items rest with their trailing edge at the viewport end, inside the
    /// trailing section inset.
    End,
}
