use super::*;
use crate::effect::layer::PropertyValue;
use crate::foundation::math::Transform3D;

fn scale_effect() -> LayerEffect {
    LayerEffect::transform(Transform3D::scale(0.5, 0.5, 1.0), Transform3D::IDENTITY)
}

fn translate_effect() -> LayerEffect {
    LayerEffect::transform(
        Transform3D::translation(100.0, 0.0, 0.0),
        Transform3D::IDENTITY,
    )
}

#[test]
fn empty_input_reduces_to_nothing() {
    assert!(reduce(Vec::new()).is_empty());
}

#[test]
fn unmergeable_effects_pass_through_in_order() {
    let effects = vec![
        LayerEffect::opacity(0.0, 1.0),
        LayerEffect::opacity(1.0, 0.5),
    ];
    assert_eq!(reduce(effects.clone()), effects);
}

#[test]
fn transform_pair_merges_to_one_effect() {
    let out = reduce(vec![scale_effect(), translate_effect()]);
    assert_eq!(out.len(), 1);

    let PropertyValue::Transform(from) = out[0].from_value() else {
        panic!("merged effect is not a transform");
    };
    assert!(from.has_scale_component());
    assert_eq!(from.translation_components().0, 100.0);
}

#[test]
fn merge_result_is_independent_of_operand_order() {
    let a = reduce(vec![scale_effect(), translate_effect()]);
    let b = reduce(vec![translate_effect(), scale_effect()]);

    let (PropertyValue::Transform(fa), PropertyValue::Transform(fb)) =
        (a[0].from_value(), b[0].from_value())
    else {
        panic!("merged effects are not transforms");
    };
    assert!(fa.approx_eq(&fb, 1e-12));
}

#[test]
fn merged_transform_follows_passthrough_effects() {
    let out = reduce(vec![
        scale_effect(),
        LayerEffect::opacity(0.0, 1.0),
        translate_effect(),
    ]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], LayerEffect::opacity(0.0, 1.0));
    assert_eq!(out[1].property_key(), PropertyKey::Transform);
}

#[test]
fn failed_merge_keeps_both_operands() {
    // A transform-from with a non-transform-to has a merge identity but
    // can never fold.
    let odd = LayerEffect::property(
        PropertyKey::Transform,
        PropertyValue::Transform(Transform3D::IDENTITY),
        PropertyValue::Float(1.0),
    );
    let out = reduce(vec![scale_effect(), odd.clone()]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], scale_effect());
    assert_eq!(out[1], odd);
}

#[test]
fn reduction_is_deterministic() {
    let effects = vec![
        scale_effect(),
        LayerEffect::opacity(0.0, 1.0),
        translate_effect(),
    ];
    assert_eq!(reduce(effects.clone()), reduce(effects));
}
