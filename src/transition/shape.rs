use kurbo::Shape;

use crate::foundation::core::{BezPath, Rect};

const PATH_TOLERANCE: f64 = 0.1;

/// A clip-mask shape a reveal transition animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MaskShape {
    /// A circle inscribed in the target rect.
    Circle,
    /// The target rect itself.
    Rectangle,
    /// The target rect with rounded corners.
    RoundedRectangle {
        /// Corner radius in points.
        radius: f64,
    },
    /// A capsule: corner radius of half the rect's shorter side.
    Capsule,
}

impl MaskShape {
    /// The shape's outline fitted into `rect`, as a path.
    pub fn path(&self, rect: Rect) -> BezPath {
        match self {
            MaskShape::Circle => {
                let radius = rect.width().min(rect.height()) * 0.5;
                kurbo::Circle::new(rect.center(), radius).to_path(PATH_TOLERANCE)
            }
            MaskShape::Rectangle => rect.to_path(PATH_TOLERANCE),
            MaskShape::RoundedRectangle { radius } => {
                kurbo::RoundedRect::from_rect(rect, *radius).to_path(PATH_TOLERANCE)
            }
            MaskShape::Capsule => {
                let radius = rect.width().min(rect.height()) * 0.5;
                kurbo::RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE)
            }
        }
    }

    /// Multiplier applied to the container's longer side to obtain a
    /// bounding square that the fully-expanded shape covers entirely.
    ///
    /// A circular mask must expand past the container diagonal before
    /// every corner is covered: the largest square inscribed in a circle
    /// of radius `r` has side `r * sqrt(2)`, so the factor must exceed
    /// `1 + sqrt(2)`.
    pub fn cover_scale(&self) -> f64 {
        match self {
            MaskShape::Circle | MaskShape::Capsule => 2.5,
            MaskShape::Rectangle | MaskShape::RoundedRectangle { .. } => 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/shape.rs"]
mod tests;
