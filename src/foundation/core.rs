pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// An edge of a rectangular container, in layout-direction-relative terms.
///
/// `Leading`/`Trailing` resolve to left/right (or right/left under
/// right-to-left layout) at transition-resolution time; `Top`/`Bottom` are
/// absolute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    /// The top edge of the container.
    Top,
    /// The leading edge (left under left-to-right layout).
    Leading,
    /// The bottom edge of the container.
    Bottom,
    /// The trailing edge (right under left-to-right layout).
    Trailing,
}

impl Edge {
    /// Whether this edge lies on the horizontal axis of the container.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Leading | Edge::Trailing)
    }
}

/// Horizontal layout direction of the host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LayoutDirection {
    /// Left-to-right layout.
    LeftToRight,
    /// Right-to-left layout.
    RightToLeft,
}

/// Light or dark appearance of the host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorScheme {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

/// Coarse size classification of one container axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SizeClass {
    /// Constrained space on this axis.
    Compact,
    /// Unconstrained space on this axis.
    Regular,
}

/// A point in the unit square, used as a relative anchor inside a container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnitPoint {
    /// Relative x in `[0, 1]` (0 = leading edge).
    pub x: f64,
    /// Relative y in `[0, 1]` (0 = top edge).
    pub y: f64,
}

impl UnitPoint {
    /// Anchor at the top-left of the unit square.
    pub const TOP_LEADING: UnitPoint = UnitPoint { x: 0.0, y: 0.0 };
    /// Anchor at the top-center.
    pub const TOP: UnitPoint = UnitPoint { x: 0.5, y: 0.0 };
    /// Anchor at the top-right.
    pub const TOP_TRAILING: UnitPoint = UnitPoint { x: 1.0, y: 0.0 };
    /// Anchor at the middle-left.
    pub const LEADING: UnitPoint = UnitPoint { x: 0.0, y: 0.5 };
    /// Anchor at the center.
    pub const CENTER: UnitPoint = UnitPoint { x: 0.5, y: 0.5 };
    /// Anchor at the middle-right.
    pub const TRAILING: UnitPoint = UnitPoint { x: 1.0, y: 0.5 };
    /// Anchor at the bottom-left.
    pub const BOTTOM_LEADING: UnitPoint = UnitPoint { x: 0.0, y: 1.0 };
    /// Anchor at the bottom-center.
    pub const BOTTOM: UnitPoint = UnitPoint { x: 0.5, y: 1.0 };
    /// Anchor at the bottom-right.
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint { x: 1.0, y: 1.0 };

    /// Build an anchor from raw unit coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Edge insets of a rectangular container.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the leading edge.
    pub leading: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the trailing edge.
    pub trailing: f64,
}

impl EdgeInsets {
    /// Insets of zero on every edge.
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    /// Build insets from per-edge values.
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

/// Total-order clamp that never panics on an inverted range.
///
/// Unlike `f64::clamp`, an inverted range collapses to `lo`.
pub(crate) fn clamped(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi.max(lo))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
