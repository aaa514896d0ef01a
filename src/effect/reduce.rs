use crate::effect::layer::{LayerEffect, PropertyKey};

/// Merge same-property effects contributed by combined transitions into a
/// minimal list for one animation group.
///
/// Effects without a merge identity pass through unchanged. Effects
/// sharing an identity fold pairwise; when a fold fails both operands are
/// kept independent (last applied wins for the rendered end state). This
/// is an optimization, not a correctness requirement: every listed effect
/// runs under the same animation group, so the net first/last visual state
/// is preserved either way.
pub fn reduce(effects: Vec<LayerEffect>) -> Vec<LayerEffect> {
    let mut merged: Vec<(PropertyKey, LayerEffect)> = Vec::new();
    let mut out: Vec<LayerEffect> = Vec::new();

    for effect in effects {
        let Some(key) = effect.merge_key() else {
            out.push(effect);
            continue;
        };

        match merged.iter().position(|(k, _)| *k == key) {
            None => merged.push((key, effect)),
            Some(i) => match effect.merged_with(&merged[i].1) {
                Some(result) => merged[i].1 = result,
                None => {
                    tracing::debug!(
                        property = key.as_str(),
                        "unmergeable effects on one property, keeping both"
                    );
                    let (_, previous) = merged.remove(i);
                    out.push(previous);
                    out.push(effect);
                }
            },
        }
    }

    out.extend(merged.into_iter().map(|(_, effect)| effect));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effect/reduce.rs"]
mod tests;
