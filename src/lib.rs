//! Scrim is a presentation transition engine for overlay UIs.
//!
//! Scrim turns a declarative description of how overlay content should
//! appear and disappear (a [`Transition`]) into concrete, reduced
//! animation work on render layers, and sequences that work against a
//! host's presentation machinery.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: compose a [`Transition`] value (`fade`, `slide`,
//!    `sheet`, ...) with [`Transition::combined`],
//!    [`Transition::animation`] and [`Transition::asymmetric`]
//! 2. **Resolve**: `Transition + TransitionEnvironment -> ResolvedTransition`
//!    (per-layer effect lists plus one timing descriptor)
//! 3. **Reduce**: [`reduce`] merges mergeable effects and fixes ordering
//! 4. **Animate**: [`PlatformAnimator`] prepares, attaches and completes
//!    one animation group per layer through the [`HostLayer`] seam
//! 5. **Orchestrate**: [`PresentationController`] drives snapshotting,
//!    backdrop crossfade and both animators across the presentation
//!    lifecycle
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: resolving the same transition in the
//!   same environment yields the same effects in the same order.
//! - **No platform IO**: all rendering and timing is behind the
//!   [`HostLayer`] and [`PresentationHost`] traits; the crate itself
//!   never touches a windowing system.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod animator;
mod controller;
mod effect;
mod foundation;
mod transition;

pub use animation::descriptor::{AnimationDescriptor, Curve, Repeat, SpringParams};
pub use animation::group::{AnimationGroup, AnimationPrimitive};
pub use animator::host::{HostLayer, LayerRef, WeakLayerRef};
pub use animator::platform::{CompletionFn, PlatformAnimator};
pub use controller::presentation::{
    AnimatedLayer, BackdropStyle, PresentationConfig, PresentationController, PresentationHost,
    PresentationPhase,
};
pub use controller::staging::{StagedPresentation, StagingAction};
pub use effect::layer::{LayerEffect, MaskEffect, PropertyEffect, PropertyKey, PropertyValue};
pub use effect::reduce::reduce;
pub use foundation::core::{
    BezPath, ColorScheme, Edge, EdgeInsets, LayoutDirection, Point, Rect, Size, SizeClass,
    UnitPoint, Vec2,
};
pub use foundation::error::{ScrimError, ScrimResult};
pub use foundation::math::Transform3D;
pub use transition::environment::{Geometry, Intent, TransitionEnvironment};
pub use transition::shape::MaskShape;
pub use transition::value::{ResolvedTransition, Transition};
