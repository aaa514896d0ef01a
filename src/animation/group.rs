use crate::{
    animation::descriptor::{AnimationDescriptor, Curve},
    effect::layer::{PropertyKey, PropertyValue},
};

/// One prepared per-property animation, ready for a host layer.
///
/// This is the data the engine hands across the host seam instead of a
/// native animation object: the host turns it into whatever primitive its
/// animation system uses.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationPrimitive {
    /// Animated layer property.
    pub property: PropertyKey,
    /// Value at the start of the animation.
    pub from: PropertyValue,
    /// Value at the end of the animation.
    pub to: PropertyValue,
    /// Start delay in seconds.
    pub delay: f64,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Duration in seconds (settling time for springs).
    pub duration: f64,
    /// Native repeat count (0 = once, `f32::MAX` = forever).
    pub repeat_count: f32,
    /// Whether repetitions alternate direction.
    pub autoreverses: bool,
    /// Easing curve.
    pub curve: Curve,
}

/// One animation group attached to one layer under a string key.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationGroup {
    /// Constituent per-property animations.
    pub primitives: Vec<AnimationPrimitive>,
    /// Group start delay in seconds.
    pub delay: f64,
    /// Group duration: the longest constituent duration, or the
    /// descriptor's duration when no primitive specifies its own.
    pub duration: f64,
}

impl AnimationDescriptor {
    /// Prepare one per-property animation timed by this descriptor.
    pub fn primitive(
        &self,
        property: PropertyKey,
        from: PropertyValue,
        to: PropertyValue,
    ) -> AnimationPrimitive {
        AnimationPrimitive {
            property,
            from,
            to,
            delay: self.delay,
            speed: self.speed,
            duration: self.effective_duration(),
            repeat_count: self.repeat.repeat_count(),
            autoreverses: self.repeat.autoreverses(),
            curve: self.curve,
        }
    }

    /// Bundle prepared animations into one group timed by this descriptor.
    pub fn group(&self, primitives: Vec<AnimationPrimitive>) -> AnimationGroup {
        let duration = primitives
            .iter()
            .map(|p| p.duration)
            .fold(None, |acc: Option<f64>, d| {
                Some(acc.map_or(d, |m| m.max(d)))
            })
            .unwrap_or(self.duration);

        AnimationGroup {
            primitives,
            delay: self.delay,
            duration,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;
