use crate::{
    animation::descriptor::AnimationDescriptor,
    animation::group::AnimationPrimitive,
    animator::host::HostLayer,
    foundation::core::BezPath,
    foundation::math::{Transform3D, concat_scale_first},
};

/// An animatable layer property driven by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PropertyKey {
    /// Layer opacity in `[0, 1]`.
    Opacity,
    /// The layer's 3-D transform.
    Transform,
    /// Corner rounding radius.
    CornerRadius,
    /// Whether sublayer content is clipped to bounds.
    MasksToBounds,
    /// The clip-mask path.
    MaskPath,
}

impl PropertyKey {
    /// Stable property-path string, usable as a native animation key path.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKey::Opacity => "opacity",
            PropertyKey::Transform => "transform",
            PropertyKey::CornerRadius => "cornerRadius",
            PropertyKey::MasksToBounds => "masksToBounds",
            PropertyKey::MaskPath => "mask.path",
        }
    }
}

/// A typed layer property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Scalar value (opacity, corner radius).
    Float(f64),
    /// Boolean value (clipping flags).
    Bool(bool),
    /// 3-D transform value.
    Transform(Transform3D),
    /// Path value (mask geometry).
    Path(BezPath),
}

/// One property's animated from/to pair on one render layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyEffect {
    /// Animated property.
    pub key: PropertyKey,
    /// Value before the animation.
    pub from: PropertyValue,
    /// Value after the animation.
    pub to: PropertyValue,
}

/// A clip-mask path animated between two shapes.
///
/// The mask is installed when the effect is prepared and released again
/// when the animation completes.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskEffect {
    /// Mask path before the animation.
    pub from_path: BezPath,
    /// Mask path after the animation.
    pub to_path: BezPath,
}

/// A unit of visual change on a single render layer.
///
/// The set of effect kinds is closed: transitions are resolved into plain
/// property effects and mask effects, nothing else.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerEffect {
    /// One-property from/to effect.
    Property(PropertyEffect),
    /// Animated clip-mask effect.
    Mask(MaskEffect),
}

impl LayerEffect {
    /// Build a one-property effect.
    pub fn property(key: PropertyKey, from: PropertyValue, to: PropertyValue) -> Self {
        LayerEffect::Property(PropertyEffect { key, from, to })
    }

    /// Build an opacity effect.
    pub fn opacity(from: f64, to: f64) -> Self {
        Self::property(
            PropertyKey::Opacity,
            PropertyValue::Float(from),
            PropertyValue::Float(to),
        )
    }

    /// Build a transform effect.
    pub fn transform(from: Transform3D, to: Transform3D) -> Self {
        Self::property(
            PropertyKey::Transform,
            PropertyValue::Transform(from),
            PropertyValue::Transform(to),
        )
    }

    /// Build a mask effect.
    pub fn mask(from_path: BezPath, to_path: BezPath) -> Self {
        LayerEffect::Mask(MaskEffect { from_path, to_path })
    }

    /// The property path this effect animates.
    pub fn property_key(&self) -> PropertyKey {
        match self {
            LayerEffect::Property(p) => p.key,
            LayerEffect::Mask(_) => PropertyKey::MaskPath,
        }
    }

    /// The value this effect starts from.
    pub fn from_value(&self) -> PropertyValue {
        match self {
            LayerEffect::Property(p) => p.from.clone(),
            LayerEffect::Mask(m) => PropertyValue::Path(m.from_path.clone()),
        }
    }

    /// The value this effect ends at.
    pub fn to_value(&self) -> PropertyValue {
        match self {
            LayerEffect::Property(p) => p.to.clone(),
            LayerEffect::Mask(m) => PropertyValue::Path(m.to_path.clone()),
        }
    }

    /// The merge identity of this effect, when it participates in
    /// reduction.
    ///
    /// Only transform property effects merge; everything else passes
    /// through the reducer unchanged.
    pub fn merge_key(&self) -> Option<PropertyKey> {
        match self {
            LayerEffect::Property(p) if matches!(p.from, PropertyValue::Transform(_)) => {
                Some(p.key)
            }
            _ => None,
        }
    }

    /// Merge this effect with an earlier effect on the same property.
    ///
    /// Transform pairs concatenate with the pure-scale operand composed
    /// first. Returns `None` when the pair cannot be merged; the caller
    /// keeps both effects independent.
    pub fn merged_with(&self, earlier: &LayerEffect) -> Option<LayerEffect> {
        let (LayerEffect::Property(later), LayerEffect::Property(earlier)) = (self, earlier)
        else {
            return None;
        };
        if later.key != earlier.key {
            return None;
        }
        let (
            PropertyValue::Transform(later_from),
            PropertyValue::Transform(later_to),
            PropertyValue::Transform(earlier_from),
            PropertyValue::Transform(earlier_to),
        ) = (&later.from, &later.to, &earlier.from, &earlier.to)
        else {
            return None;
        };

        Some(LayerEffect::transform(
            concat_scale_first(*earlier_from, *later_from),
            concat_scale_first(*earlier_to, *later_to),
        ))
    }

    /// Prepare this effect to run: put the layer into the *from* state and
    /// produce the animation primitive the host will drive.
    pub fn prepare(
        &self,
        descriptor: &AnimationDescriptor,
        layer: &mut dyn HostLayer,
    ) -> AnimationPrimitive {
        match self {
            LayerEffect::Property(p) => {
                layer.set_property(p.key, p.from.clone());
            }
            LayerEffect::Mask(m) => {
                layer.set_mask(Some(m.from_path.clone()));
            }
        }
        descriptor.primitive(self.property_key(), self.from_value(), self.to_value())
    }

    /// Snap the layer's model value to the *to* state.
    pub fn apply(&self, layer: &mut dyn HostLayer) {
        match self {
            LayerEffect::Property(p) => layer.set_property(p.key, p.to.clone()),
            LayerEffect::Mask(m) => layer.set_mask(Some(m.to_path.clone())),
        }
    }

    /// Hook invoked when the native animation starts.
    pub fn did_start(&self, _layer: &mut dyn HostLayer) {}

    /// Hook invoked when the native animation completes; releases
    /// temporary state such as installed masks.
    pub fn did_complete(&self, layer: &mut dyn HostLayer, _finished: bool) {
        if let LayerEffect::Mask(_) = self {
            layer.set_mask(None);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/layer.rs"]
mod tests;
