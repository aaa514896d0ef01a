//! Per-primitive effect resolution.
//!
//! All functions here resolve for the insertion intent and mirror the
//! from/to pair for removal, unless noted otherwise (push flips direction,
//! displace drives both layers).

use crate::{
    effect::layer::{LayerEffect, PropertyKey, PropertyValue},
    foundation::core::{Edge, Point, Rect, Size, UnitPoint, clamped},
    foundation::math::Transform3D,
    transition::environment::{Intent, TransitionEnvironment},
    transition::shape::MaskShape,
};

/// Corner radius the presenting layer gains under a sheet transition.
pub(crate) const SHEET_CORNER_RADIUS: f64 = 32.0;
/// Scale the presenting layer shrinks to under a sheet transition.
pub(crate) const SHEET_PRESENTER_SCALE: f64 = 0.8;

/// Transform effect running `target` -> identity on insertion and
/// identity -> `target` on removal.
fn directional_transform(env: &TransitionEnvironment, target: Transform3D) -> LayerEffect {
    match env.intent {
        Intent::Insertion => LayerEffect::transform(target, Transform3D::IDENTITY),
        Intent::Removal => LayerEffect::transform(Transform3D::IDENTITY, target),
    }
}

/// The reverse: identity -> `target` on insertion. Used for effects on the
/// presenting layer, which starts in place and moves away.
fn inverse_directional_transform(env: &TransitionEnvironment, target: Transform3D) -> LayerEffect {
    match env.intent {
        Intent::Insertion => LayerEffect::transform(Transform3D::IDENTITY, target),
        Intent::Removal => LayerEffect::transform(target, Transform3D::IDENTITY),
    }
}

/// Offscreen translation for `edge`, one container dimension long.
fn edge_translation(edge: Edge, frame: Rect) -> (f64, f64) {
    match edge {
        Edge::Top => (0.0, -frame.height()),
        Edge::Leading => (-frame.width(), 0.0),
        Edge::Bottom => (0.0, frame.height()),
        Edge::Trailing => (frame.width(), 0.0),
    }
}

pub(crate) fn fade_effects(env: &TransitionEnvironment) -> Vec<LayerEffect> {
    let effect = match env.intent {
        Intent::Insertion => LayerEffect::opacity(0.0, 1.0),
        Intent::Removal => LayerEffect::opacity(1.0, 0.0),
    };
    vec![effect]
}

pub(crate) fn move_effects(edge: Edge, env: &TransitionEnvironment) -> Vec<LayerEffect> {
    let effective_edge = env.layout_relative_edge(edge);
    let (x, y) = edge_translation(effective_edge, env.geometry.frame);
    vec![directional_transform(
        env,
        Transform3D::translation(x, y, 0.0),
    )]
}

pub(crate) fn scale_effects(factor: f64, env: &TransitionEnvironment) -> Vec<LayerEffect> {
    vec![directional_transform(
        env,
        Transform3D::scale(factor, factor, 1.0),
    )]
}

/// Push translation flips sign between insertion and removal, so new
/// content enters from one side while the old exits to the opposite side.
pub(crate) fn push_effects(edge: Edge, env: &TransitionEnvironment) -> Vec<LayerEffect> {
    let factor = match env.intent {
        Intent::Insertion => 1.0,
        Intent::Removal => -1.0,
    };
    let (x, y) = edge_translation(edge, env.geometry.frame);
    vec![directional_transform(
        env,
        Transform3D::translation(x * factor, y * factor, 0.0),
    )]
}

pub(crate) fn displace_presented_effects(
    edge: Edge,
    env: &TransitionEnvironment,
) -> Vec<LayerEffect> {
    let (x, y) = edge_translation(edge, env.geometry.frame);
    vec![directional_transform(
        env,
        Transform3D::translation(x, y, 0.0),
    )]
}

/// The presenting layer is displaced the same distance in the opposite
/// direction, moving out of the way as the presented content slides in.
pub(crate) fn displace_presenting_effects(
    edge: Edge,
    env: &TransitionEnvironment,
) -> Vec<LayerEffect> {
    let (x, y) = edge_translation(edge, env.geometry.frame);
    vec![inverse_directional_transform(
        env,
        Transform3D::translation(-x, -y, 0.0),
    )]
}

pub(crate) fn flip_effects(edge: Edge, env: &TransitionEnvironment) -> Vec<LayerEffect> {
    let axis = match edge {
        Edge::Top => (1.0, 0.0, 0.0),
        Edge::Bottom => (-1.0, 0.0, 0.0),
        Edge::Trailing => (0.0, 1.0, 0.0),
        Edge::Leading => (0.0, -1.0, 0.0),
    };
    vec![directional_transform(
        env,
        Transform3D::rotation(std::f64::consts::FRAC_PI_2, axis),
    )]
}

pub(crate) fn sheet_presented_effects(env: &TransitionEnvironment) -> Vec<LayerEffect> {
    vec![directional_transform(
        env,
        Transform3D::translation(0.0, env.geometry.frame.height(), 0.0),
    )]
}

pub(crate) fn sheet_presenting_effects(env: &TransitionEnvironment) -> Vec<LayerEffect> {
    let scaled = Transform3D::scale(SHEET_PRESENTER_SCALE, SHEET_PRESENTER_SCALE, 1.0);
    let is_insertion = env.intent == Intent::Insertion;

    let (radius_from, radius_to) = if is_insertion {
        (0.0, SHEET_CORNER_RADIUS)
    } else {
        (SHEET_CORNER_RADIUS, 0.0)
    };

    vec![
        inverse_directional_transform(env, scaled),
        LayerEffect::property(
            PropertyKey::MasksToBounds,
            PropertyValue::Bool(false),
            PropertyValue::Bool(true),
        ),
        LayerEffect::property(
            PropertyKey::CornerRadius,
            PropertyValue::Float(radius_from),
            PropertyValue::Float(radius_to),
        ),
    ]
}

pub(crate) fn reveal_effects(
    shape: &MaskShape,
    anchor: UnitPoint,
    initial_size: Size,
    env: &TransitionEnvironment,
) -> Vec<LayerEffect> {
    let size = env.geometry.frame.size();
    let origin = reveal_origin_rect(anchor, initial_size, size);
    let destination = reveal_destination_rect(shape, origin, size);

    let effect = match env.intent {
        Intent::Insertion => LayerEffect::mask(shape.path(origin), shape.path(destination)),
        Intent::Removal => LayerEffect::mask(shape.path(destination), shape.path(origin)),
    };
    vec![effect]
}

/// Rect of `initial_size` placed at `anchor`, clamped inside the
/// container.
pub(crate) fn reveal_origin_rect(anchor: UnitPoint, initial_size: Size, container: Size) -> Rect {
    let origin = Point::new(
        clamped(
            container.width * anchor.x - initial_size.width * 0.5,
            0.0,
            container.width - initial_size.width,
        ),
        clamped(
            container.height * anchor.y - initial_size.height * 0.5,
            0.0,
            container.height - initial_size.height,
        ),
    );
    Rect::from_origin_size(origin, initial_size)
}

/// Maximal square the shape expands to: the container's longer side scaled
/// by the shape's cover factor, horizontally centred over the origin rect.
pub(crate) fn reveal_destination_rect(shape: &MaskShape, origin: Rect, container: Size) -> Rect {
    let side = container.width.max(container.height) * shape.cover_scale();
    let x = origin.min_x() - (side * 0.5 - origin.width() * 0.5);
    Rect::from_origin_size(Point::new(x, 0.0), Size::new(side, side))
}

#[cfg(test)]
#[path = "../../tests/unit/transition/primitives.rs"]
mod tests;
