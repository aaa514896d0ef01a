use crate::{
    animation::descriptor::AnimationDescriptor,
    effect::layer::LayerEffect,
    foundation::core::{Edge, Size, UnitPoint},
    foundation::error::ScrimResult,
    transition::environment::{Intent, TransitionEnvironment},
    transition::primitives,
    transition::shape::MaskShape,
};

/// The minimum factor a scale transition shrinks to.
///
/// A true zero scale degenerates the transform matrix.
const MIN_SCALE_FACTOR: f64 = 0.001;

/// A declarative, composable description of how presented content appears
/// and disappears.
///
/// A transition is a closed interpreter tree: a fixed set of primitives
/// plus `Animated`, `Combined` and `Asymmetric` wrapper nodes. Values are
/// pure data: freely cloneable, serde-serializable, and comparable with
/// `==` for change detection (structurally equal transitions resolve
/// identically).
///
/// Resolution against a [`TransitionEnvironment`] is a total function:
/// idempotent, side-effect free, and never failing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Transition {
    /// No visual change; absorbed by combinators.
    Identity,
    /// Opacity 0 -> 1.
    Fade,
    /// Translate in from the given container edge.
    Move {
        /// Edge the content enters from (layout-direction-relative).
        edge: Edge,
    },
    /// Uniform scale from `factor` up to 1.
    Scale {
        /// Starting scale factor.
        factor: f64,
    },
    /// Like move, but removal exits through the opposite edge, like a
    /// navigation-stack push.
    Push {
        /// Edge the content enters from.
        edge: Edge,
    },
    /// Move the presented content in while pushing the presenting content
    /// out the opposite way.
    Displace {
        /// Edge the presented content enters from.
        edge: Edge,
    },
    /// Rotate 90 degrees about the axis perpendicular to the given edge.
    Flip {
        /// Edge the content flips in over.
        edge: Edge,
    },
    /// Expand a clip-mask shape from a point until it covers the
    /// container.
    Reveal {
        /// Mask shape to expand.
        shape: MaskShape,
        /// Relative anchor the shape expands from.
        anchor: UnitPoint,
        /// Size of the shape before expansion.
        initial_size: Size,
    },
    /// Bottom sheet: content slides up while the presenting content
    /// scales back and gains rounded, clipped corners.
    Sheet,
    /// A transition with its animation descriptor overridden.
    Animated {
        /// Wrapped transition.
        inner: Box<Transition>,
        /// Overriding descriptor.
        animation: AnimationDescriptor,
    },
    /// Two transitions acting together; the second operand's timing wins.
    Combined {
        /// First operand.
        first: Box<Transition>,
        /// Second operand.
        second: Box<Transition>,
    },
    /// Different transitions for insertion and removal.
    Asymmetric {
        /// Transition used with insertion intent.
        insertion: Box<Transition>,
        /// Transition used with removal intent.
        removal: Box<Transition>,
    },
}

/// The outcome of resolving a transition against one environment.
#[derive(Clone, Debug)]
pub struct ResolvedTransition {
    /// Timing for the whole pass.
    pub animation: AnimationDescriptor,
    /// Effects on the presented layer.
    pub presented: Vec<LayerEffect>,
    /// Effects on the presenting layer beneath it.
    pub presenting: Vec<LayerEffect>,
}

impl Transition {
    /// The no-op transition.
    pub fn identity() -> Self {
        Transition::Identity
    }

    /// Opacity fade.
    pub fn fade() -> Self {
        Transition::Fade
    }

    /// Translate in from `edge`.
    pub fn move_from(edge: Edge) -> Self {
        Transition::Move { edge }
    }

    /// Slide up from the bottom edge.
    pub fn slide() -> Self {
        Transition::Move { edge: Edge::Bottom }
    }

    /// Scale from `factor` (clamped to a small positive minimum) to 1.
    pub fn scale(factor: f64) -> Self {
        Transition::Scale {
            factor: factor.max(MIN_SCALE_FACTOR),
        }
    }

    /// Stack-push from `edge`.
    pub fn push(edge: Edge) -> Self {
        Transition::Push { edge }
    }

    /// Displace the presenting content out through the opposite edge.
    pub fn displace(edge: Edge) -> Self {
        Transition::Displace { edge }
    }

    /// Flip in over the trailing edge.
    pub fn flip() -> Self {
        Transition::Flip {
            edge: Edge::Trailing,
        }
    }

    /// Flip in over `edge`.
    pub fn flip_from(edge: Edge) -> Self {
        Transition::Flip { edge }
    }

    /// Reveal through a circular mask expanding from a point at the
    /// bottom of the container.
    pub fn reveal() -> Self {
        Transition::Reveal {
            shape: MaskShape::Circle,
            anchor: UnitPoint::BOTTOM,
            initial_size: Size::ZERO,
        }
    }

    /// Reveal starting from a shape of `initial_size`.
    pub fn reveal_from(shape: MaskShape, anchor: UnitPoint, initial_size: Size) -> Self {
        Transition::Reveal {
            shape,
            anchor,
            initial_size,
        }
    }

    /// Bottom-sheet transition.
    pub fn sheet() -> Self {
        Transition::Sheet
    }

    /// Split behavior by intent.
    pub fn asymmetric(insertion: Transition, removal: Transition) -> Self {
        Transition::Asymmetric {
            insertion: Box::new(insertion),
            removal: Box::new(removal),
        }
    }

    /// Override the animation descriptor of this transition.
    ///
    /// Identity stays absorptive: animating the identity is still the
    /// identity.
    pub fn animation(self, animation: AnimationDescriptor) -> Self {
        if self == Transition::Identity {
            return self;
        }
        Transition::Animated {
            inner: Box::new(self),
            animation,
        }
    }

    /// Act together with `other`.
    ///
    /// Effect lists concatenate per layer (merging is deferred to the
    /// effect reducer at animation time); the second operand's animation
    /// descriptor wins, so appending `.animation(..)` overrides timing for
    /// the whole chain. Identity is absorbed on either side.
    pub fn combined(self, other: Transition) -> Self {
        if self == Transition::Identity {
            return other;
        }
        if other == Transition::Identity {
            return self;
        }
        Transition::Combined {
            first: Box::new(self),
            second: Box::new(other),
        }
    }

    /// Whether this transition also animates the presenting layer beneath
    /// the presented content.
    pub fn animates_presenting_layer(&self) -> bool {
        match self {
            Transition::Displace { .. } | Transition::Sheet => true,
            Transition::Animated { inner, .. } => inner.animates_presenting_layer(),
            Transition::Combined { first, second } => {
                first.animates_presenting_layer() || second.animates_presenting_layer()
            }
            Transition::Asymmetric { insertion, removal } => {
                insertion.animates_presenting_layer() || removal.animates_presenting_layer()
            }
            _ => false,
        }
    }

    /// Resolve the animation descriptor for one pass.
    pub fn resolve_animation(&self, env: &TransitionEnvironment) -> AnimationDescriptor {
        match self {
            Transition::Identity => AnimationDescriptor::linear_with_duration(0.0),
            Transition::Animated { animation, .. } => *animation,
            Transition::Combined { second, .. } => second.resolve_animation(env),
            Transition::Asymmetric { insertion, removal } => match env.intent {
                Intent::Insertion => insertion.resolve_animation(env),
                Intent::Removal => removal.resolve_animation(env),
            },
            _ => AnimationDescriptor::default(),
        }
    }

    /// Resolve the effects on the presented layer.
    pub fn resolve_presented_effects(&self, env: &TransitionEnvironment) -> Vec<LayerEffect> {
        match self {
            Transition::Identity => Vec::new(),
            Transition::Fade => primitives::fade_effects(env),
            Transition::Move { edge } => primitives::move_effects(*edge, env),
            Transition::Scale { factor } => primitives::scale_effects(*factor, env),
            Transition::Push { edge } => primitives::push_effects(*edge, env),
            Transition::Displace { edge } => primitives::displace_presented_effects(*edge, env),
            Transition::Flip { edge } => primitives::flip_effects(*edge, env),
            Transition::Reveal {
                shape,
                anchor,
                initial_size,
            } => primitives::reveal_effects(shape, *anchor, *initial_size, env),
            Transition::Sheet => primitives::sheet_presented_effects(env),
            Transition::Animated { inner, .. } => inner.resolve_presented_effects(env),
            Transition::Combined { first, second } => {
                let mut effects = first.resolve_presented_effects(env);
                effects.extend(second.resolve_presented_effects(env));
                effects
            }
            Transition::Asymmetric { insertion, removal } => match env.intent {
                Intent::Insertion => insertion.resolve_presented_effects(env),
                Intent::Removal => removal.resolve_presented_effects(env),
            },
        }
    }

    /// Resolve the effects on the presenting layer.
    pub fn resolve_presenting_effects(&self, env: &TransitionEnvironment) -> Vec<LayerEffect> {
        match self {
            Transition::Displace { edge } => primitives::displace_presenting_effects(*edge, env),
            Transition::Sheet => primitives::sheet_presenting_effects(env),
            Transition::Animated { inner, .. } => inner.resolve_presenting_effects(env),
            Transition::Combined { first, second } => {
                let mut effects = first.resolve_presenting_effects(env);
                effects.extend(second.resolve_presenting_effects(env));
                effects
            }
            Transition::Asymmetric { insertion, removal } => match env.intent {
                Intent::Insertion => insertion.resolve_presenting_effects(env),
                Intent::Removal => removal.resolve_presenting_effects(env),
            },
            _ => Vec::new(),
        }
    }

    /// Resolve the full transition against one environment.
    #[tracing::instrument(level = "debug", skip_all, fields(intent = ?env.intent))]
    pub fn resolve(&self, env: &TransitionEnvironment) -> ResolvedTransition {
        ResolvedTransition {
            animation: self.resolve_animation(env),
            presented: self.resolve_presented_effects(env),
            presenting: self.resolve_presenting_effects(env),
        }
    }

    /// Validate every animation descriptor carried in the tree.
    pub fn validate(&self) -> ScrimResult<()> {
        match self {
            Transition::Animated { inner, animation } => {
                animation.validate()?;
                inner.validate()
            }
            Transition::Combined { first, second } => {
                first.validate()?;
                second.validate()
            }
            Transition::Asymmetric { insertion, removal } => {
                insertion.validate()?;
                removal.validate()
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/value.rs"]
mod tests;
