use super::*;

#[test]
fn constructors_pick_the_matching_variant() {
    assert!(matches!(
        ScrimError::validation("bad"),
        ScrimError::Validation(_)
    ));
    assert!(matches!(
        ScrimError::animation("bad"),
        ScrimError::Animation(_)
    ));
    assert!(matches!(
        ScrimError::presentation("bad"),
        ScrimError::Presentation(_)
    ));
}

#[test]
fn messages_carry_context() {
    let err = ScrimError::validation("backdrop opacity must be within [0, 1]");
    assert_eq!(
        err.to_string(),
        "validation error: backdrop opacity must be within [0, 1]"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let err: ScrimError = anyhow::anyhow!("layer vanished").into();
    assert_eq!(err.to_string(), "layer vanished");
}
