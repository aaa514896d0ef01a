use crate::foundation::core::{ColorScheme, Edge, EdgeInsets, LayoutDirection, Rect, SizeClass};

/// Whether a resolution pass brings content in or takes it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Intent {
    /// The presented content is being inserted.
    Insertion,
    /// The presented content is being removed.
    Removal,
}

/// Container geometry at the moment a transition begins.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Frame of the presentation container.
    pub frame: Rect,
    /// Safe-area insets of the container.
    pub safe_area_insets: EdgeInsets,
}

impl Geometry {
    /// Zero geometry, used as the degraded fallback when the host is not
    /// laid out yet. Geometry-relative effects resolve to zero distance.
    pub const ZERO: Geometry = Geometry {
        frame: Rect::ZERO,
        safe_area_insets: EdgeInsets::ZERO,
    };

    /// Build a geometry snapshot.
    pub fn new(frame: Rect, safe_area_insets: EdgeInsets) -> Self {
        Self {
            frame,
            safe_area_insets,
        }
    }
}

/// Read-only context a transition is resolved against.
///
/// Snapshotted once per resolution pass by the presentation controller and
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionEnvironment {
    /// Insertion or removal.
    pub intent: Intent,
    /// Container geometry.
    pub geometry: Geometry,
    /// Light or dark appearance.
    pub color_scheme: ColorScheme,
    /// Horizontal size class.
    pub horizontal_size_class: SizeClass,
    /// Vertical size class.
    pub vertical_size_class: SizeClass,
    /// Layout direction.
    pub layout_direction: LayoutDirection,
}

impl TransitionEnvironment {
    /// Build an environment with regular size classes, light appearance
    /// and left-to-right layout.
    pub fn new(intent: Intent, geometry: Geometry) -> Self {
        Self {
            intent,
            geometry,
            color_scheme: ColorScheme::Light,
            horizontal_size_class: SizeClass::Regular,
            vertical_size_class: SizeClass::Regular,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    /// Resolve a layout-direction-relative edge: leading and trailing swap
    /// under right-to-left layout, top and bottom are unaffected.
    pub fn layout_relative_edge(&self, edge: Edge) -> Edge {
        if self.layout_direction == LayoutDirection::LeftToRight {
            return edge;
        }
        match edge {
            Edge::Leading => Edge::Trailing,
            Edge::Trailing => Edge::Leading,
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/environment.rs"]
mod tests;
